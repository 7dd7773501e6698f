//! Exercise catalog.
//!
//! Catalog entries are reusable movement definitions referenced by routine
//! assignments. They are never owned by a routine: deleting an entry that
//! is still referenced is rejected with a conflict, not cascaded.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CatalogEntryId, ValidationError};

/// Training modality of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Functional,
    Olympic,
}

impl ExerciseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "Strength",
            ExerciseCategory::Cardio => "Cardio",
            ExerciseCategory::Flexibility => "Flexibility",
            ExerciseCategory::Functional => "Functional",
            ExerciseCategory::Olympic => "Olympic",
        }
    }
}

/// Primary muscle group targeted by a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    FullBody,
}

impl MuscleGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full body",
        }
    }
}

/// A named movement available for routine programming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCatalogEntry {
    pub id: CatalogEntryId,
    pub name: String,
    pub description: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
    pub active: bool,
}

impl ExerciseCatalogEntry {
    /// Creates a new active catalog entry.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` when the name is blank.
    pub fn create(
        id: CatalogEntryId,
        name: String,
        description: String,
        category: ExerciseCategory,
        muscle_group: MuscleGroup,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            description,
            category,
            muscle_group,
            active: true,
        })
    }

    /// Updates the entry's descriptive fields.
    pub fn update(
        &mut self,
        name: String,
        description: String,
        category: ExerciseCategory,
        muscle_group: MuscleGroup,
    ) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        self.name = name;
        self.description = description;
        self.category = category;
        self.muscle_group = muscle_group;
        Ok(())
    }

    /// Hides the entry from programming pickers without deleting it.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let result = ExerciseCatalogEntry::create(
            CatalogEntryId::new(),
            "  ".into(),
            String::new(),
            ExerciseCategory::Strength,
            MuscleGroup::Legs,
        );
        assert!(result.is_err());
    }

    #[test]
    fn category_tokens_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&MuscleGroup::FullBody).unwrap(),
            "\"full_body\""
        );
        assert_eq!(
            serde_json::to_string(&ExerciseCategory::Olympic).unwrap(),
            "\"olympic\""
        );
    }
}
