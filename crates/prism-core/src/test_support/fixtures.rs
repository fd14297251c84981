//! Shared fixture models and records for core tests.

use crate::source::Record;
use prism_schema::model::{Cardinality, EntityModel, FieldModel, ScalarKind};
use ulid::Ulid;

pub const PERSON_PATH: &str = "test_support::Person";
pub const POST_PATH: &str = "test_support::Post";
pub const GROUP_PATH: &str = "test_support::Group";
pub const CATEGORY_PATH: &str = "test_support::Category";

static PERSON_FIELDS: &[FieldModel] = &[
    FieldModel::scalar("id", ScalarKind::Ulid),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::scalar("age", ScalarKind::Uint),
    FieldModel::scalar("email", ScalarKind::Text),
];

pub static PERSON: EntityModel = EntityModel {
    path: PERSON_PATH,
    entity_name: "person",
    plural_name: Some("people"),
    primary_key: "id",
    fields: PERSON_FIELDS,
    // deferred via the entity-level list
    deferred_fields: &["email"],
};

static POST_FIELDS: &[FieldModel] = &[
    FieldModel::scalar("id", ScalarKind::Ulid),
    FieldModel::scalar("title", ScalarKind::Text),
    // deferred via the field-level flag
    FieldModel::scalar("body", ScalarKind::Text).deferred(),
    FieldModel::relation("author", PERSON_PATH, Cardinality::One),
];

pub static POST: EntityModel = EntityModel {
    path: POST_PATH,
    entity_name: "post",
    plural_name: None,
    primary_key: "id",
    fields: POST_FIELDS,
    deferred_fields: &[],
};

static GROUP_FIELDS: &[FieldModel] = &[
    FieldModel::scalar("id", ScalarKind::Ulid),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::relation("members", PERSON_PATH, Cardinality::Many),
];

pub static GROUP: EntityModel = EntityModel {
    path: GROUP_PATH,
    entity_name: "group",
    plural_name: None,
    primary_key: "id",
    fields: GROUP_FIELDS,
    deferred_fields: &[],
};

static CATEGORY_FIELDS: &[FieldModel] = &[
    FieldModel::scalar("id", ScalarKind::Uint),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::relation("parent", CATEGORY_PATH, Cardinality::Opt),
];

pub static CATEGORY: EntityModel = EntityModel {
    path: CATEGORY_PATH,
    entity_name: "category",
    plural_name: Some("categories"),
    primary_key: "id",
    fields: CATEGORY_FIELDS,
    deferred_fields: &[],
};

#[must_use]
pub fn person_id(n: u128) -> Ulid {
    Ulid::from_parts(1, n)
}

#[must_use]
pub fn person_ada() -> Record {
    Record::new(&PERSON)
        .with_value("id", person_id(1))
        .with_value("name", "ada")
        .with_value("age", 36u64)
        .with_value("email", "ada@example.com")
}

#[must_use]
pub fn person_grace() -> Record {
    Record::new(&PERSON)
        .with_value("id", person_id(2))
        .with_value("name", "grace")
        .with_value("age", 45u64)
        .with_value("email", "grace@example.com")
}

#[must_use]
pub fn post_by_ada() -> Record {
    Record::new(&POST)
        .with_value("id", Ulid::from_parts(2, 1))
        .with_value("title", "field selection")
        .with_value("body", "long body text")
        .with_one("author", person_ada())
}

#[must_use]
pub fn group_of_two() -> Record {
    Record::new(&GROUP)
        .with_value("id", Ulid::from_parts(3, 1))
        .with_value("name", "engineering")
        .with_many("members", vec![person_ada(), person_grace()])
}

/// Build a parent chain `depth` categories tall, leaf first.
#[must_use]
pub fn category_chain(depth: u64) -> Record {
    let mut record = Record::new(&CATEGORY)
        .with_value("id", 0u64)
        .with_value("name", "root")
        .with_none("parent");

    for level in 1..depth {
        record = Record::new(&CATEGORY)
            .with_value("id", level)
            .with_value("name", format!("level-{level}"))
            .with_one("parent", record);
    }

    record
}
