// DietView - core/sort.rs
//
// Protein-descending ordering of food items within each option panel.
// Runs once at plan load time, before the first frame.

use crate::core::model::{DietPlan, FoodItem, MealOption};
use crate::core::nutrition;
use std::cmp::Ordering;

/// Sort every sortable section's option panels by descending protein.
///
/// Sections with `sortable = false` (supplements) are left untouched.
pub fn sort_plan(plan: &mut DietPlan) {
    for meal in &mut plan.meals {
        if !meal.sortable {
            continue;
        }
        for option in &mut meal.options {
            sort_option(option);
        }
    }
}

/// Reorder one panel's items by strictly descending protein grams.
///
/// Total rows are excluded from the sort and reattached after the sorted
/// items, preserving their own relative order. Panels with 0 or 1 non-total
/// items are left untouched. The sort is stable: ties keep input order.
pub fn sort_option(option: &mut MealOption) {
    let food_count = option.items.iter().filter(|i| !i.total).count();
    if food_count <= 1 {
        return;
    }

    let (mut foods, totals): (Vec<FoodItem>, Vec<FoodItem>) =
        option.items.drain(..).partition(|i| !i.total);

    // Vec::sort_by is stable, so equal protein values keep input order.
    foods.sort_by(|a, b| {
        let pa = nutrition::protein_grams(a.protein.as_deref());
        let pb = nutrition::protein_grams(b.protein.as_deref());
        pb.partial_cmp(&pa).unwrap_or(Ordering::Equal)
    });

    option.items = foods;
    option.items.extend(totals);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, protein: Option<&str>) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            portion: None,
            protein: protein.map(|p| p.to_string()),
            carbs: None,
            fat: None,
            calories: None,
            total: false,
        }
    }

    fn total_row(protein: &str) -> FoodItem {
        FoodItem {
            total: true,
            ..item("Total", Some(protein))
        }
    }

    fn option(items: Vec<FoodItem>) -> MealOption {
        MealOption {
            key: "a".to_string(),
            label: "Opção A".to_string(),
            items,
        }
    }

    fn names(option: &MealOption) -> Vec<&str> {
        option.items.iter().map(|i| i.name.as_str()).collect()
    }

    /// Descending order, stable on ties: [10g, 25g, 5g, 25g] as (a,b,c,d)
    /// must come out as [b, d, a, c].
    #[test]
    fn test_descending_and_stable_on_ties() {
        let mut opt = option(vec![
            item("a", Some("10g Proteína")),
            item("b", Some("25g Proteína")),
            item("c", Some("5g Proteína")),
            item("d", Some("25g Proteína")),
        ]);
        sort_option(&mut opt);
        assert_eq!(names(&opt), vec!["b", "d", "a", "c"]);
    }

    /// A trailing total row stays last after sorting.
    #[test]
    fn test_total_row_stays_last() {
        let mut opt = option(vec![
            item("a", Some("5g Proteína")),
            item("b", Some("30g Proteína")),
            total_row("35g Proteína"),
        ]);
        sort_option(&mut opt);
        assert_eq!(names(&opt), vec!["b", "a", "Total"]);
        assert!(opt.items.last().unwrap().total);
    }

    /// Items without a parsable protein value count as 0 and sink to the end.
    #[test]
    fn test_unparsable_protein_counts_as_zero() {
        let mut opt = option(vec![
            item("a", None),
            item("b", Some("8g Proteína")),
            item("c", Some("a gosto")),
        ]);
        sort_option(&mut opt);
        // b first; a and c both 0, keeping input order.
        assert_eq!(names(&opt), vec!["b", "a", "c"]);
    }

    /// Panels with a single food item are untouched.
    #[test]
    fn test_single_item_untouched() {
        let mut opt = option(vec![item("only", Some("3g Proteína")), total_row("3g")]);
        sort_option(&mut opt);
        assert_eq!(names(&opt), vec!["only", "Total"]);
    }

    /// Empty panels are untouched.
    #[test]
    fn test_empty_panel_untouched() {
        let mut opt = option(vec![]);
        sort_option(&mut opt);
        assert!(opt.items.is_empty());
    }

    /// Unsortable sections (supplements) keep their authored order.
    #[test]
    fn test_unsortable_section_skipped() {
        let mut plan = DietPlan {
            title: "t".to_string(),
            meals: vec![crate::core::model::MealSection {
                key: "supplements".to_string(),
                title: "Suplementação".to_string(),
                sortable: false,
                options: vec![option(vec![
                    item("creatina", Some("0g")),
                    item("whey", Some("24g Proteína")),
                ])],
            }],
        };
        sort_plan(&mut plan);
        assert_eq!(names(&plan.meals[0].options[0]), vec!["creatina", "whey"]);
    }

    /// Sortable sections in a plan are sorted by sort_plan.
    #[test]
    fn test_sort_plan_sorts_sortable_sections() {
        let mut plan = DietPlan {
            title: "t".to_string(),
            meals: vec![crate::core::model::MealSection {
                key: "lunch".to_string(),
                title: "Almoço".to_string(),
                sortable: true,
                options: vec![option(vec![
                    item("arroz", Some("4g Proteína")),
                    item("frango", Some("32g Proteína")),
                ])],
            }],
        };
        sort_plan(&mut plan);
        assert_eq!(names(&plan.meals[0].options[0]), vec!["frango", "arroz"]);
    }
}
