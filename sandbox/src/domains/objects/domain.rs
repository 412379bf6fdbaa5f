use serde::{Deserialize, Serialize};

use crate::objects::{build_body, BodyDef, FixtureDef, SimObjectSpec};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct ObjectId(pub usize);

/// Identity and construction contract of everything living in a simulation.
pub trait SimObject {
    fn id(&self) -> ObjectId;

    fn object_type(&self) -> &str;

    fn body_def(&self) -> &BodyDef;

    fn fixture_defs(&self) -> &[FixtureDef];

    #[allow(unused_variables)]
    fn update(&mut self, elapsed: f32) {}
}

/// Passive body built from a [`SimObjectSpec`]: obstacles, field elements, chassis.
pub struct SimBody {
    pub id: ObjectId,
    spec: SimObjectSpec,
    body: BodyDef,
    fixtures: Vec<FixtureDef>,
}

impl SimBody {
    pub(crate) fn new(id: ObjectId, spec: SimObjectSpec, field_size: [f32; 2]) -> Self {
        let (body, fixtures) = build_body(&spec, field_size);
        Self {
            id,
            spec,
            body,
            fixtures,
        }
    }

    pub fn spec(&self) -> &SimObjectSpec {
        &self.spec
    }
}

impl SimObject for SimBody {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn object_type(&self) -> &str {
        self.spec.type_name()
    }

    fn body_def(&self) -> &BodyDef {
        &self.body
    }

    fn fixture_defs(&self) -> &[FixtureDef] {
        &self.fixtures
    }
}

pub struct ObjectsDomain {
    pub objects: Vec<SimBody>,
    pub field_size: [f32; 2],
}

impl ObjectsDomain {
    pub fn new(field_size: [f32; 2]) -> Self {
        Self {
            objects: vec![],
            field_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Objects {
    ObjectCreated {
        id: ObjectId,
        object_type: String,
        position: [f32; 2],
        is_static: bool,
    },
    ObjectDestroyed {
        id: ObjectId,
    },
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum SpecError {
    MissingType,
    UnknownType {
        type_name: String,
    },
    Malformed {
        type_name: String,
        reason: String,
    },
    InvalidGeometry {
        type_name: String,
        field: String,
        value: f32,
    },
    DuplicateSensor {
        identifier: String,
    },
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum ObjectsError {
    Spec(SpecError),
    ObjectAlreadyExists { id: ObjectId },
    ObjectNotFound { id: ObjectId },
}

impl From<SpecError> for ObjectsError {
    fn from(error: SpecError) -> Self {
        Self::Spec(error)
    }
}
