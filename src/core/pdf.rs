// DietView - core/pdf.rs
//
// PDF rendering of the plan. Produces the document bytes; writing the
// output file is the caller's concern.
//
// Renders the panels marked active in the given ViewState. The export
// orchestrator forces every panel active first, so a normal export
// captures the full plan regardless of which tabs were open.

use crate::core::model::{panel_id, DietPlan, FoodItem, MealOption, MealSection};
use crate::core::view::ViewState;
use crate::util::constants;
use crate::util::error::ExportError;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

/// Fixed page configuration for the exported document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Page width in millimetres.
    pub page_width_mm: f32,
    /// Page height in millimetres.
    pub page_height_mm: f32,
    /// Margin in millimetres, all four sides.
    pub margin_mm: f32,
}

impl Default for ExportOptions {
    /// A4 portrait with 10 mm margins.
    fn default() -> Self {
        Self {
            page_width_mm: constants::PAGE_WIDTH_MM,
            page_height_mm: constants::PAGE_HEIGHT_MM,
            margin_mm: constants::PAGE_MARGIN_MM,
        }
    }
}

// Font sizes in points.
const TITLE_SIZE: f32 = 20.0;
const DATE_SIZE: f32 = 9.0;
const SECTION_SIZE: f32 = 14.0;
const OPTION_SIZE: f32 = 11.5;
const ITEM_SIZE: f32 = 10.0;
const MACRO_SIZE: f32 = 9.0;

/// Millimetres of vertical advance per point of font size.
/// 1 pt = 0.3528 mm; the factor includes line spacing.
const LINE_ADVANCE_MM_PER_PT: f32 = 0.45;

/// Render the active panels of `plan` to PDF bytes.
pub fn render_plan(
    plan: &DietPlan,
    view: &ViewState,
    opts: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        &plan.title,
        Mm(opts.page_width_mm),
        Mm(opts.page_height_mm),
        "content",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf { source: e })?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf { source: e })?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_mm: opts.page_height_mm - opts.margin_mm,
        opts: opts.clone(),
        page_count: 1,
    };

    writer.text(&plan.title, TITLE_SIZE, 0.0, &font_bold);
    let generated = chrono::Local::now().format("%d/%m/%Y").to_string();
    writer.layer.set_fill_color(grey());
    writer.text(&format!("Gerado em {generated}"), DATE_SIZE, 0.0, &font);
    writer.layer.set_fill_color(black());

    for meal in &plan.meals {
        render_section(&mut writer, view, meal, &font, &font_bold);
    }

    tracing::debug!(pages = writer.page_count, "Plan rendered");

    doc.save_to_bytes().map_err(|e| ExportError::Pdf { source: e })
}

fn render_section(
    writer: &mut PageWriter<'_>,
    view: &ViewState,
    meal: &MealSection,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
) {
    let active: Vec<&MealOption> = meal
        .options
        .iter()
        .filter(|o| view.is_panel_active(&panel_id(&meal.key, &o.key)))
        .collect();
    if active.is_empty() {
        return;
    }

    writer.space(4.0);
    writer.text(&meal.title, SECTION_SIZE, 0.0, font_bold);

    for option in active {
        writer.space(1.5);
        writer.text(&option.label, OPTION_SIZE, 2.0, font_bold);
        for item in &option.items {
            render_item(writer, item, font, font_bold);
        }
    }
}

fn render_item(
    writer: &mut PageWriter<'_>,
    item: &FoodItem,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
) {
    let name_font = if item.total { font_bold } else { font };
    let line = match &item.portion {
        Some(portion) => format!("{} - {portion}", item.name),
        None => item.name.clone(),
    };
    writer.text(&line, ITEM_SIZE, 4.0, name_font);

    let macros: Vec<&str> = [
        item.protein.as_deref(),
        item.carbs.as_deref(),
        item.fat.as_deref(),
        item.calories.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !macros.is_empty() {
        writer.layer.set_fill_color(grey());
        writer.text(&macros.join("  |  "), MACRO_SIZE, 6.0, font);
        writer.layer.set_fill_color(black());
    }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.1, 0.1, 0.1, None))
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(0.45, 0.45, 0.45, None))
}

/// Cursor over the document: tracks the vertical position and starts a new
/// page when a line would cross the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
    opts: ExportOptions,
    page_count: usize,
}

impl PageWriter<'_> {
    fn text(&mut self, text: &str, size_pt: f32, indent_mm: f32, font: &IndirectFontRef) {
        let advance = size_pt * LINE_ADVANCE_MM_PER_PT;
        self.ensure_room(advance);
        self.y_mm -= advance;
        self.layer.use_text(
            text,
            size_pt,
            Mm(self.opts.margin_mm + indent_mm),
            Mm(self.y_mm),
            font,
        );
    }

    fn space(&mut self, mm: f32) {
        // Vertical gap only; never forces a page break on its own.
        self.y_mm = (self.y_mm - mm).max(self.opts.margin_mm);
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y_mm - needed_mm < self.opts.margin_mm {
            let (page, layer) = self.doc.add_page(
                Mm(self.opts.page_width_mm),
                Mm(self.opts.page_height_mm),
                "content",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = self.opts.page_height_mm - self.opts.margin_mm;
            self.page_count += 1;
        }
    }
}
