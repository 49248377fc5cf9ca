use crate::models::{Note, NoteInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Field {
    Title,
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Content is required")]
    ContentRequired,
}

/// Inline error slots, one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldErrors {
    pub title: Option<ValidationError>,
    pub content: Option<ValidationError>,
}

impl FieldErrors {
    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub(crate) fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Title => self.title.as_ref(),
            Field::Content => self.content.as_ref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
        }
    }
}

/// Both fields must be at least one character long. Whitespace counts.
pub(crate) fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    if !value.is_empty() {
        return None;
    }
    Some(match field {
        Field::Title => ValidationError::TitleRequired,
        Field::Content => ValidationError::ContentRequired,
    })
}

/// Transient editor state. Created when an editor opens, dropped when it closes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteForm {
    pub title: String,
    pub content: String,
    pub errors: FieldErrors,

    /// Set after the first submit attempt; later edits re-validate their field.
    pub submitted: bool,
}

impl NoteForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            ..Self::default()
        }
    }

    pub(crate) fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Content => self.content = value,
        }
        if self.submitted {
            let err = validate_field(field, self.value(field));
            *self.errors.slot(field) = err;
        }
    }

    pub(crate) fn validate(&mut self) -> Result<NoteInput, FieldErrors> {
        self.submitted = true;
        self.errors = FieldErrors {
            title: validate_field(Field::Title, &self.title),
            content: validate_field(Field::Content, &self.content),
        };

        if self.errors.is_empty() {
            Ok(NoteInput {
                title: self.title.clone(),
                content: self.content.clone(),
            })
        } else {
            Err(self.errors.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_blocks_with_title_error_only() {
        let mut form = NoteForm::new();
        form.set(Field::Content, "hi".to_string());

        let errors = form.validate().expect_err("empty title should be rejected");
        assert_eq!(errors.title, Some(ValidationError::TitleRequired));
        assert!(errors.content.is_none());
        assert_eq!(
            errors.title.map(|e| e.to_string()).as_deref(),
            Some("Title is required")
        );
    }

    #[test]
    fn test_both_empty_reports_both_fields() {
        let mut form = NoteForm::new();
        let errors = form.validate().expect_err("empty form should be rejected");
        assert_eq!(errors.get(Field::Title), Some(&ValidationError::TitleRequired));
        assert_eq!(errors.get(Field::Content), Some(&ValidationError::ContentRequired));
    }

    #[test]
    fn test_valid_form_produces_input() {
        let mut form = NoteForm::new();
        form.set(Field::Title, "T".to_string());
        form.set(Field::Content, " ".to_string());

        let input = form.validate().expect("non-empty fields should pass");
        assert_eq!(input.title, "T");
        assert_eq!(input.content, " ");
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_edit_after_failed_submit_revalidates_field() {
        let mut form = NoteForm::new();
        assert!(form.validate().is_err());

        form.set(Field::Title, "x".to_string());
        assert!(form.errors.title.is_none());
        assert!(form.errors.content.is_some());

        form.set(Field::Title, String::new());
        assert_eq!(form.errors.title, Some(ValidationError::TitleRequired));
    }

    #[test]
    fn test_edit_before_submit_does_not_show_errors() {
        let mut form = NoteForm::new();
        form.set(Field::Title, String::new());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_from_note_prefills_fields() {
        let note = Note {
            id: "1".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
            created_at: "2024-01-01".to_string(),
        };
        let form = NoteForm::from_note(&note);
        assert_eq!(form.value(Field::Title), "T");
        assert_eq!(form.value(Field::Content), "C");
        assert!(!form.submitted);
    }
}
