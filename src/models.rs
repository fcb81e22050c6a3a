//! Frontend Models
//!
//! Supplement records as supplied by the owning application.

use serde::{Deserialize, Serialize};

/// Ingredient of a supplement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Supplement data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default = "default_true")]
    pub favorite: bool,
}

fn default_true() -> bool {
    true
}

impl Supplement {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: Vec::new(),
            favorite: true,
        }
    }

    /// Ingredient names joined for the table cell
    pub fn ingredient_summary(&self) -> String {
        self.ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Unit of the first ingredient
    pub fn unit_label(&self) -> Option<&str> {
        self.ingredients.first().and_then(|i| i.unit.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ingredient(name: &str, unit: Option<&str>) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            unit: unit.map(str::to_string),
        }
    }

    #[test]
    fn test_ingredient_summary() {
        let mut s = Supplement::new(1, "Daily Multi");
        assert_eq!(s.ingredient_summary(), "");

        s.ingredients = vec![
            make_ingredient("Vitamin C", Some("mg")),
            make_ingredient("Zinc", Some("mg")),
            make_ingredient("Vitamin D3", Some("IU")),
        ];
        assert_eq!(s.ingredient_summary(), "Vitamin C, Zinc, Vitamin D3");
    }

    #[test]
    fn test_unit_label_uses_first_ingredient() {
        let mut s = Supplement::new(1, "Stack");
        assert_eq!(s.unit_label(), None);

        s.ingredients = vec![make_ingredient("Creatine", None), make_ingredient("Zinc", Some("mg"))];
        assert_eq!(s.unit_label(), None);

        s.ingredients.swap(0, 1);
        assert_eq!(s.unit_label(), Some("mg"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let s: Supplement = serde_json::from_str(r#"{"id": 7, "name": "Magnesium"}"#).unwrap();
        assert_eq!(s, Supplement::new(7, "Magnesium"));

        let s: Supplement = serde_json::from_str(
            r#"{"id": 8, "name": "Fish Oil", "favorite": false,
                "ingredients": [{"name": "EPA", "unit": null}, {"name": "DHA"}]}"#,
        )
        .unwrap();
        assert!(!s.favorite);
        assert_eq!(s.ingredients.len(), 2);
        assert_eq!(s.ingredients[1].unit, None);
    }
}
