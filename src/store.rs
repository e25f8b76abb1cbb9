//! Template store: built-ins, custom templates, and the current selection
//!
//! The store is the single entry point that couples template data to live
//! editor state. Callers apply and save templates through it rather than
//! touching the canvas collaborators directly.

use chrono::Utc;
use log::{info, warn};

use crate::applier;
use crate::canvas::CanvasContext;
use crate::error::TemplateError;
use crate::persistence::{PersistedTemplates, TemplateStorage};
use crate::template::id::custom_template_id;
use crate::template::{builtin_templates, Category, Template};

#[derive(Debug)]
pub struct TemplateStore {
    templates: Vec<Template>,
    custom_templates: Vec<Template>,
    selected_template: Option<Template>,
    storage: Option<Box<dyn TemplateStorage>>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// A store holding only the built-in catalog, without persistence
    pub fn new() -> Self {
        Self {
            templates: builtin_templates(),
            custom_templates: Vec::new(),
            selected_template: None,
            storage: None,
        }
    }

    /// A store whose custom templates are loaded from and saved to `storage`
    ///
    /// Stored entries whose id collides with an earlier entry or a built-in,
    /// or which fail validation, are skipped.
    pub fn with_storage(storage: Box<dyn TemplateStorage>) -> Result<Self, TemplateError> {
        let record = storage.load()?;
        let mut store = Self::new();
        if let Some(record) = record {
            store.rehydrate(record.state.custom_templates);
        }
        store.storage = Some(storage);
        Ok(store)
    }

    fn rehydrate(&mut self, stored: Vec<Template>) {
        for mut template in stored {
            if self.contains_id(&template.id) {
                warn!("skipping stored template with duplicate id '{}'", template.id);
                continue;
            }
            if let Err(err) = template.validate() {
                warn!("skipping stored template: {}", err);
                continue;
            }
            if template.created_at.is_none() {
                warn!("skipping stored template '{}' without creation time", template.id);
                continue;
            }
            template.is_custom = true;
            self.custom_templates.push(template);
        }
        info!("loaded {} custom templates", self.custom_templates.len());
    }

    /// Built-in templates in catalog order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Custom templates in insertion order
    pub fn custom_templates(&self) -> &[Template] {
        &self.custom_templates
    }

    /// Built-ins followed by custom templates, the gallery's display order
    pub fn all_templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter().chain(self.custom_templates.iter())
    }

    pub fn selected_template(&self) -> Option<&Template> {
        self.selected_template.as_ref()
    }

    pub fn find(&self, id: &str) -> Option<&Template> {
        self.all_templates().find(|t| t.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn storage(&self) -> Option<&dyn TemplateStorage> {
        self.storage.as_deref()
    }

    /// Record the selection without touching the canvas
    pub fn set_selected_template(&mut self, template: Option<Template>) {
        self.selected_template = template;
    }

    /// Append a template to the custom collection under a fresh id
    ///
    /// If persisting fails the template stays in the session and the storage
    /// error is returned.
    pub fn add_custom_template(&mut self, mut template: Template) -> Result<&Template, TemplateError> {
        let mut id = custom_template_id();
        while self.contains_id(&id) {
            id = custom_template_id();
        }
        template.id = id;
        template.is_custom = true;
        template.created_at = Some(Utc::now());
        template.validate()?;

        info!("adding custom template '{}' ({})", template.name, template.id);
        self.custom_templates.push(template);
        self.persist()?;
        let index = self.custom_templates.len() - 1;
        Ok(&self.custom_templates[index])
    }

    /// Remove a custom template; returns whether anything was removed
    ///
    /// Unknown ids and built-in ids are a no-op.
    pub fn remove_custom_template(&mut self, id: &str) -> Result<bool, TemplateError> {
        let Some(index) = self.custom_templates.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let removed = self.custom_templates.remove(index);
        info!("removed custom template '{}' ({})", removed.name, removed.id);
        self.persist()?;
        Ok(true)
    }

    /// Project a template onto the canvas and select it
    pub fn apply_template(&mut self, template: &Template, ctx: &mut CanvasContext<'_>) {
        applier::project(template, ctx);
        info!("applied template '{}'", template.id);
        self.selected_template = Some(template.clone());
    }

    /// Look up a template by id, then apply it
    pub fn apply_template_by_id(
        &mut self,
        id: &str,
        ctx: &mut CanvasContext<'_>,
    ) -> Result<&Template, TemplateError> {
        let template = self
            .find(id)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() })?;
        self.apply_template(&template, ctx);
        Ok(self.selected_template.insert(template))
    }

    /// Capture the canvas as a new custom template
    ///
    /// `name` must not be blank; a blank name is reported as
    /// [`TemplateError::Invalid`] and nothing is stored. Canvas values the
    /// template model cannot hold, such as a non-positive text size, are
    /// replaced by capture defaults.
    pub fn save_as_template(
        &mut self,
        name: &str,
        description: &str,
        category: Category,
        ctx: &CanvasContext<'_>,
    ) -> Result<&Template, TemplateError> {
        if name.trim().is_empty() {
            return Err(TemplateError::invalid(name, "name must not be empty"));
        }
        let template = applier::capture(name, description, category, ctx);
        self.add_custom_template(template)
    }

    fn persist(&mut self) -> Result<(), TemplateError> {
        if let Some(storage) = self.storage.as_mut() {
            let record = PersistedTemplates::new(self.custom_templates.clone());
            storage.save(&record)?;
        }
        Ok(())
    }
}
