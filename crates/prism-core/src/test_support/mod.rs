pub mod fixtures;

use prism_schema::registry::SchemaRegistry;

/// Build a registry holding every fixture entity, validated.
pub fn fixture_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    for model in [
        &fixtures::PERSON,
        &fixtures::POST,
        &fixtures::GROUP,
        &fixtures::CATEGORY,
    ] {
        registry
            .register(model)
            .expect("fixture registration should succeed");
    }

    registry
        .validate()
        .expect("fixture registry should validate");

    registry
}
