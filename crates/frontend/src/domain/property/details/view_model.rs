use contracts::domain::property::Property;
use contracts::validation::{FieldErrors, Validate};
use leptos::prelude::*;

/// ViewModel for the property form dialog.
///
/// Owns the draft: an entity copy being edited (id carried through on edit,
/// empty on create), the raw comma-delimited features line and the current
/// validation errors. Discarded wholesale on cancel.
#[derive(Clone, Copy)]
pub struct PropertyDetailsViewModel {
    pub form: RwSignal<Property>,
    pub features_text: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
    pub edit_mode: bool,
}

impl PropertyDetailsViewModel {
    pub fn new(existing: Option<Property>) -> Self {
        let edit_mode = existing.is_some();
        let features_text = existing
            .as_ref()
            .map(|p| p.features.join(", "))
            .unwrap_or_default();
        Self {
            form: RwSignal::new(existing.unwrap_or_default()),
            features_text: RwSignal::new(features_text),
            errors: RwSignal::new(FieldErrors::new()),
            edit_mode,
        }
    }

    pub fn error_for(&self, path: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.get().get(path).map(str::to_string))
    }

    /// Appends arrive one per finished decode; with several files in flight
    /// the order is completion order, not selection order.
    pub fn push_image(&self, url: String) {
        self.form.update(|f| f.images.push(url));
    }

    pub fn remove_image(&self, index: usize) {
        self.form.update(|f| {
            if index < f.images.len() {
                f.images.remove(index);
            }
        });
    }

    /// Assemble the draft, run validation, and either hand the complete
    /// entity to the caller or surface the per-field messages and abort.
    pub fn submit(&self, on_save: Callback<Property>) {
        let mut draft = self.form.get_untracked();
        draft.features = split_features(&self.features_text.get_untracked());
        match draft.validate() {
            Ok(()) => {
                self.errors.set(FieldErrors::new());
                on_save.run(draft);
            }
            Err(errors) => self.errors.set(errors),
        }
    }
}

/// One comma-delimited line → trimmed, empty-filtered feature list.
pub fn split_features(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_features_trims_and_drops_empty_entries() {
        assert_eq!(
            split_features("Piscina,  Academia ,, Salão de Festas ,"),
            ["Piscina", "Academia", "Salão de Festas"]
        );
        assert!(split_features("").is_empty());
        assert!(split_features(" , , ").is_empty());
    }
}
