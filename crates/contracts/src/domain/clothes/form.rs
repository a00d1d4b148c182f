//! Form-side contract of the clothes creation dialog.
//!
//! The raw field values are strings straight from the inputs; validation and
//! the text-to-number coercion live here so the wasm view-model and native
//! tests share one implementation. Rules and the size list are injected, not
//! global, so alternate configurations can be substituted.

use crate::domain::clothes::aggregate::{NewClothes, StockEntry};
use crate::enums::garment_size::GarmentSize;

/// Inline error messages for the creation form fields
#[derive(Debug, Clone)]
pub struct ClothesFormRules {
    pub design_required: String,
    pub color_required: String,
    pub price_required: String,
    pub price_invalid: String,
    pub image_required: String,
    pub stock_invalid: String,
}

impl Default for ClothesFormRules {
    fn default() -> Self {
        Self {
            design_required: "Design name is required".into(),
            color_required: "Color is required".into(),
            price_required: "Price is required".into(),
            price_invalid: "Price must be a positive number".into(),
            image_required: "An image is required".into(),
            stock_invalid: "Stock must be a non-negative whole number".into(),
        }
    }
}

/// One stock input row: a fixed, non-editable size plus the raw quantity text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    pub size: GarmentSize,
    pub quantity: String,
}

/// Generate one empty row per size, preserving the given order.
///
/// Deterministic: the same size slice always yields the same rows.
pub fn stock_rows(sizes: &[GarmentSize]) -> Vec<StockRow> {
    sizes
        .iter()
        .map(|&size| StockRow {
            size,
            quantity: String::new(),
        })
        .collect()
}

/// Raw state of the creation form for one dialog session
#[derive(Debug, Clone, PartialEq)]
pub struct ClothesFormData {
    pub design: String,
    pub color: String,
    pub price: String,
    pub stock: Vec<StockRow>,
    /// The file itself lives in UI state; validation only needs presence.
    pub has_image: bool,
}

impl ClothesFormData {
    pub fn for_sizes(sizes: &[GarmentSize]) -> Self {
        Self {
            design: String::new(),
            color: String::new(),
            price: String::new(),
            stock: stock_rows(sizes),
            has_image: false,
        }
    }

    /// Field-level validation, run on submit. Errors render inline next to
    /// their field and block the network call.
    pub fn validate(&self, rules: &ClothesFormRules) -> FormErrors {
        let mut errors = FormErrors {
            stock: vec![None; self.stock.len()],
            ..FormErrors::default()
        };

        if self.design.trim().is_empty() {
            errors.design = Some(rules.design_required.clone());
        }
        if self.color.trim().is_empty() {
            errors.color = Some(rules.color_required.clone());
        }
        if self.price.trim().is_empty() {
            errors.price = Some(rules.price_required.clone());
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(p) if p > 0.0 => {}
                _ => errors.price = Some(rules.price_invalid.clone()),
            }
        }
        if !self.has_image {
            errors.image = Some(rules.image_required.clone());
        }
        for (i, row) in self.stock.iter().enumerate() {
            if row.quantity.trim().parse::<u32>().is_err() {
                errors.stock[i] = Some(rules.stock_invalid.clone());
            }
        }

        errors
    }

    /// Coerce the raw text fields into the numeric submission payload.
    ///
    /// Callers validate first; a parse failure here still comes back as an
    /// error rather than a panic.
    pub fn to_payload(&self) -> Result<NewClothes, String> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("not a number: {:?}", self.price))?;

        let stock = self
            .stock
            .iter()
            .map(|row| {
                row.quantity
                    .trim()
                    .parse::<u32>()
                    .map(|quantity| StockEntry {
                        size: row.size,
                        quantity,
                    })
                    .map_err(|_| format!("not a quantity: {:?}", row.quantity))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewClothes {
            design: self.design.trim().to_string(),
            color: self.color.trim().to_string(),
            price,
            stock,
        })
    }
}

/// Per-field validation outcome; `stock` is index-aligned with the rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub design: Option<String>,
    pub color: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub stock: Vec<Option<String>>,
}

impl FormErrors {
    pub fn is_clean(&self) -> bool {
        self.design.is_none()
            && self.color.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.stock.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ClothesFormData {
        let mut form = ClothesFormData::for_sizes(&GarmentSize::ALL);
        form.design = "Test Shirt".into();
        form.color = "Red".into();
        form.price = "100".into();
        form.has_image = true;
        for row in &mut form.stock {
            row.quantity = "5".into();
        }
        form
    }

    #[test]
    fn blank_required_fields_block_submission() {
        let form = ClothesFormData::for_sizes(&GarmentSize::ALL);
        let errors = form.validate(&ClothesFormRules::default());
        assert!(!errors.is_clean());
        assert!(errors.design.is_some());
        assert!(errors.color.is_some());
        assert!(errors.price.is_some());
        assert!(errors.image.is_some());
        assert!(errors.stock.iter().all(Option::is_some));
    }

    #[test]
    fn valid_input_coerces_to_numbers() {
        let form = filled_form();
        assert!(form.validate(&ClothesFormRules::default()).is_clean());

        let payload = form.to_payload().expect("payload");
        assert_eq!(payload.design, "Test Shirt");
        assert_eq!(payload.color, "Red");
        assert_eq!(payload.price, 100.0);
        let sizes: Vec<GarmentSize> = payload.stock.iter().map(|s| s.size).collect();
        assert_eq!(sizes, GarmentSize::ALL.to_vec());
        assert!(payload.stock.iter().all(|s| s.quantity == 5));
    }

    #[test]
    fn price_zero_is_invalid() {
        let mut form = filled_form();
        form.price = "0".into();
        let errors = form.validate(&ClothesFormRules::default());
        assert!(errors.price.is_some());
    }

    #[test]
    fn negative_quantity_is_invalid() {
        let mut form = filled_form();
        form.stock[2].quantity = "-1".into();
        let errors = form.validate(&ClothesFormRules::default());
        assert!(errors.stock[2].is_some());
        assert!(errors.stock[0].is_none());
    }

    #[test]
    fn row_generation_is_deterministic() {
        assert_eq!(stock_rows(&GarmentSize::ALL), stock_rows(&GarmentSize::ALL));
    }

    #[test]
    fn alternate_size_sets_are_honored() {
        let sizes = [GarmentSize::M, GarmentSize::S];
        let rows = stock_rows(&sizes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].size, GarmentSize::M);
        assert_eq!(rows[1].size, GarmentSize::S);
    }
}
