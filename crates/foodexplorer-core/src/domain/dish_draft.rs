// ============================================================================
// Food Explorer Core - Dish Draft
// File: crates/foodexplorer-core/src/domain/dish_draft.rs
// Description: In-memory state of the "add dish" form
// ============================================================================

use bytes::Bytes;
use tracing::debug;
use validator::Validate;

use super::Price;
use crate::error::DomainError;

/// Image picked for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Content type guessed from the file extension
    pub fn from_file_name(file_name: impl Into<String>, bytes: Bytes) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Dish draft.
///
/// Never persisted. The image is optional; every other field is required
/// before the draft can be submitted.
#[derive(Debug, Clone, Default, Validate)]
pub struct DishDraft {
    image: Option<ImageAttachment>,

    #[validate(length(min = 1, message = "Name is required"))]
    name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    category: String,

    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    ingredients: Vec<String>,

    pending_ingredient: String,

    #[validate(length(min = 1, message = "Price is required"))]
    price: String,

    #[validate(length(min = 1, message = "Description is required"))]
    description: String,
}

impl DishDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn pending_ingredient(&self) -> &str {
        &self.pending_ingredient
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Only `image/*` attachments are accepted; anything else leaves the
    /// current selection untouched.
    pub fn select_image(&mut self, attachment: ImageAttachment) -> Result<(), DomainError> {
        if !attachment.is_image() {
            return Err(DomainError::UnsupportedImageType(attachment.content_type));
        }
        self.image = Some(attachment);
        Ok(())
    }

    /// Drops both the preview and the file; a removed image is not uploaded.
    pub fn remove_image(&mut self) {
        self.image = None;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_pending_ingredient(&mut self, text: impl Into<String>) {
        self.pending_ingredient = text.into();
    }

    /// Append `text` as typed. The pending input is cleared either way.
    pub fn add_ingredient(&mut self, text: &str) -> Result<(), DomainError> {
        self.pending_ingredient.clear();

        if text.trim().is_empty() {
            return Err(DomainError::BlankIngredient);
        }

        self.ingredients.push(text.to_string());
        Ok(())
    }

    /// Commit whatever is in the pending ingredient input
    pub fn add_pending_ingredient(&mut self) -> Result<(), DomainError> {
        let text = std::mem::take(&mut self.pending_ingredient);
        self.add_ingredient(&text)
    }

    /// Removes every entry equal to `value`. Returns how many were removed.
    pub fn remove_ingredient(&mut self, value: &str) -> usize {
        let before = self.ingredients.len();
        self.ingredients.retain(|ingredient| ingredient != value);
        before - self.ingredients.len()
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build the submission payload.
    ///
    /// Fails with `DraftIncomplete` when a required field is blank and with
    /// `InvalidPrice` when the price does not match `^[0-9]{1,3},[0-9]{2}$`.
    pub fn to_new_dish(&self) -> Result<NewDish, DomainError> {
        self.validate()
            .map_err(|e| DomainError::DraftIncomplete(e.to_string()))?;

        let price = Price::parse(&self.price)?;
        debug!("Draft {} ready for submission at {} cents", self.name, price.cents());

        Ok(NewDish {
            image: self.image.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            ingredients: self.ingredients.clone(),
            price,
            description: self.description.clone(),
        })
    }
}

/// Payload for `POST /dishes`
#[derive(Debug, Clone, PartialEq)]
pub struct NewDish {
    pub image: Option<ImageAttachment>,
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub price: Price,
    pub description: String,
}

impl NewDish {
    /// Ingredients as the stringified JSON array the backend expects
    pub fn ingredients_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(&self.ingredients)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> DishDraft {
        let mut draft = DishDraft::new();
        draft.set_name("Salada Ravanello");
        draft.set_category("Refeições");
        draft.add_ingredient("rabanete").unwrap();
        draft.set_price("49,97");
        draft.set_description("Rabanetes, folhas verdes e molho agridoce.");
        draft
    }

    #[test]
    fn test_complete_draft_is_submittable() {
        assert!(complete_draft().is_submittable());
    }

    #[test]
    fn test_single_blank_field_blocks_submission() {
        let mut d = complete_draft();
        d.set_name("");
        assert!(!d.is_submittable());

        let mut d = complete_draft();
        d.set_category("");
        assert!(!d.is_submittable());

        let mut d = complete_draft();
        d.set_price("");
        assert!(!d.is_submittable());

        let mut d = complete_draft();
        d.set_description("");
        assert!(!d.is_submittable());

        let mut d = complete_draft();
        d.remove_ingredient("rabanete");
        assert!(!d.is_submittable());
    }

    #[test]
    fn test_image_is_optional() {
        let mut d = complete_draft();
        d.remove_image();
        assert!(d.is_submittable());
    }

    #[test]
    fn test_blank_ingredient_is_rejected_and_input_cleared() {
        let mut d = DishDraft::new();
        d.set_pending_ingredient("   ");
        assert!(matches!(d.add_pending_ingredient(), Err(DomainError::BlankIngredient)));
        assert!(d.ingredients().is_empty());
        assert_eq!(d.pending_ingredient(), "");
    }

    #[test]
    fn test_add_pending_ingredient() {
        let mut d = DishDraft::new();
        d.set_pending_ingredient("alface");
        d.add_pending_ingredient().unwrap();
        assert_eq!(d.ingredients(), ["alface".to_string()]);
        assert_eq!(d.pending_ingredient(), "");
    }

    #[test]
    fn test_remove_ingredient_removes_all_duplicates() {
        let mut d = DishDraft::new();
        d.add_ingredient("tomate").unwrap();
        d.add_ingredient("cebola").unwrap();
        d.add_ingredient("tomate").unwrap();

        assert_eq!(d.remove_ingredient("tomate"), 2);
        assert_eq!(d.ingredients(), ["cebola".to_string()]);
        assert_eq!(d.remove_ingredient("pepino"), 0);
    }

    #[test]
    fn test_select_image_rejects_non_images() {
        let mut d = DishDraft::new();
        let pdf = ImageAttachment::from_file_name("menu.pdf", Bytes::from_static(b"%PDF"));
        assert!(matches!(d.select_image(pdf), Err(DomainError::UnsupportedImageType(_))));
        assert!(d.image().is_none());

        let png = ImageAttachment::from_file_name("prato.png", Bytes::from_static(b"\x89PNG"));
        assert_eq!(png.content_type, "image/png");
        d.select_image(png).unwrap();
        assert!(d.image().is_some());
    }

    #[test]
    fn test_to_new_dish_converts_price() {
        let new_dish = complete_draft().to_new_dish().unwrap();
        assert_eq!(new_dish.price.to_form_value(), "49.97");
        assert_eq!(new_dish.ingredients_json().unwrap(), r#"["rabanete"]"#);
    }

    #[test]
    fn test_to_new_dish_rejects_bad_price() {
        let mut d = complete_draft();
        d.set_price("49.97");
        assert!(d.is_submittable());
        assert!(matches!(d.to_new_dish(), Err(DomainError::InvalidPrice(_))));
    }

    #[test]
    fn test_to_new_dish_rejects_incomplete_draft() {
        let mut d = complete_draft();
        d.set_description("");
        assert!(matches!(d.to_new_dish(), Err(DomainError::DraftIncomplete(_))));
    }
}
