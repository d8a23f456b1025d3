use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A static label/description pair describing one action available to an
/// organizational role. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDescriptor {
    pub label: String,
    pub description: String,
}

/// Role name to ordered interaction descriptors. Descriptor order is
/// insertion order and is the display order; duplicates are permitted and
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InteractionCatalog {
    roles: BTreeMap<String, Vec<InteractionDescriptor>>,
}

impl InteractionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five fixed roles every deployment starts with.
    pub fn with_default_roles() -> Self {
        let mut catalog = Self::new();
        catalog.add_interaction(
            "Executive",
            "Broadcast announcement",
            "Send a company-wide announcement.",
        );
        catalog.add_interaction(
            "Executive",
            "Review org changes",
            "Approve pending reporting-line changes.",
        );
        catalog.add_interaction(
            "Director",
            "Open headcount plan",
            "Review the unit's current headcount plan.",
        );
        catalog.add_interaction(
            "Manager",
            "Schedule 1:1",
            "Book a one-on-one with a direct report.",
        );
        catalog.add_interaction(
            "Manager",
            "Request transfer",
            "Start a transfer request for a direct report.",
        );
        catalog.add_interaction(
            "Team Lead",
            "Assign on-call",
            "Rotate the team's on-call assignment.",
        );
        catalog.add_interaction(
            "Member",
            "View profile",
            "Open the member's profile card.",
        );
        catalog
    }

    /// Appends a descriptor to the role's sequence, creating the role lazily
    /// on first use. No emptiness or duplicate validation, by contract.
    pub fn add_interaction(
        &mut self,
        role: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.roles
            .entry(role.into())
            .or_default()
            .push(InteractionDescriptor {
                label: label.into(),
                description: description.into(),
            });
    }

    /// Direct lookup; an absent role is the caller's condition to handle.
    pub fn interactions(&self, role: &str) -> Option<&[InteractionDescriptor]> {
        self.roles.get(role).map(Vec::as_slice)
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionCatalog, InteractionDescriptor};

    #[test]
    fn first_append_creates_the_role_lazily() {
        let mut catalog = InteractionCatalog::new();
        assert!(catalog.is_empty());

        catalog.add_interaction("NewRole", "X", "Y");

        assert_eq!(catalog.role_count(), 1);
        assert_eq!(
            catalog.interactions("NewRole"),
            Some(
                [InteractionDescriptor {
                    label: "X".to_owned(),
                    description: "Y".to_owned(),
                }]
                .as_slice()
            )
        );
    }

    #[test]
    fn second_append_preserves_insertion_order() {
        let mut catalog = InteractionCatalog::new();
        catalog.add_interaction("NewRole", "X", "Y");
        catalog.add_interaction("NewRole", "Archive", "Move the role to the archive.");

        let descriptors = catalog.interactions("NewRole").unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].label, "X");
        assert_eq!(descriptors[1].label, "Archive");
    }

    #[test]
    fn duplicate_labels_are_permitted_and_preserved() {
        let mut catalog = InteractionCatalog::new();
        catalog.add_interaction("Manager", "Ping", "First copy.");
        catalog.add_interaction("Manager", "Ping", "Second copy.");

        let descriptors = catalog.interactions("Manager").unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].label, descriptors[1].label);
        assert_ne!(descriptors[0].description, descriptors[1].description);
    }

    #[test]
    fn absent_role_lookup_returns_none() {
        let catalog = InteractionCatalog::with_default_roles();
        assert_eq!(catalog.interactions("Contractor"), None);
    }

    #[test]
    fn default_catalog_seeds_five_roles() {
        let catalog = InteractionCatalog::with_default_roles();
        assert_eq!(catalog.role_count(), 5);
        assert_eq!(
            catalog.role_names().collect::<Vec<_>>(),
            vec!["Director", "Executive", "Manager", "Member", "Team Lead"]
        );
        assert_eq!(catalog.interactions("Executive").unwrap().len(), 2);
    }

    #[test]
    fn catalog_serializes_roles_with_ordered_descriptors() {
        let mut catalog = InteractionCatalog::new();
        catalog.add_interaction("Member", "View profile", "Open the profile card.");
        catalog.add_interaction("Member", "Message", "Send a direct message.");

        let value = serde_json::to_value(&catalog).expect("catalog should serialize");
        let labels = value["roles"]["Member"]
            .as_array()
            .expect("descriptors should be an array")
            .iter()
            .map(|entry| entry["label"].as_str().unwrap().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["View profile", "Message"]);
    }
}
