use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::objects::validation::{
    discriminant, ensure_fields, ensure_finite, ensure_non_negative, ensure_positive,
};
use crate::objects::SpecError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2d {
    pub x: f32,
    pub y: f32,
}

impl Vector2d {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vector2d> for [f32; 2] {
    fn from(vector: Vector2d) -> Self {
        [vector.x, vector.y]
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3d {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Overrides applied to a physics body, absent values keep engine defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhysicsProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_damping: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_damping: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restitution: Option<f32>,
}

/// Fields shared by every positioned object.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<Vector2d>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physics_properties: Option<PhysicsProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    #[serde(flatten)]
    pub base: BaseSpec,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    #[serde(flatten)]
    pub base: BaseSpec,
    pub dimensions: Vector3d,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    #[serde(flatten)]
    pub base: BaseSpec,
    pub start: Vector2d,
    pub end: Vector2d,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidSpec {
    #[serde(flatten)]
    pub base: BaseSpec,
    pub base_dimensions: Vector2d,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeSpec {
    #[serde(flatten)]
    pub base: BaseSpec,
    pub radius: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    #[serde(flatten)]
    pub base: BaseSpec,
    pub radius: f32,
    pub height: f32,
}

/// Field boundary, placed around the configured field extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerimeterSpec {
    pub thickness: f32,
    pub height: f32,
}

pub const SIM_OBJECT_TYPES: [&str; 7] = [
    "ball",
    "box",
    "wall",
    "pyramid",
    "cone",
    "cylinder",
    "perimeter",
];

/// Keys of a spec object per variant, next to its `type` tag.
fn variant_fields(type_name: &str) -> &'static [&'static str] {
    match type_name {
        "ball" => &["isStatic", "initialPosition", "physicsProperties", "baseColor", "radius"],
        "box" => &["isStatic", "initialPosition", "physicsProperties", "baseColor", "dimensions"],
        "wall" => &[
            "isStatic",
            "initialPosition",
            "physicsProperties",
            "baseColor",
            "start",
            "end",
            "thickness",
            "height",
        ],
        "pyramid" => &[
            "isStatic",
            "initialPosition",
            "physicsProperties",
            "baseColor",
            "baseDimensions",
            "height",
        ],
        "cone" | "cylinder" => &[
            "isStatic",
            "initialPosition",
            "physicsProperties",
            "baseColor",
            "radius",
            "height",
        ],
        "perimeter" => &["thickness", "height"],
        _ => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SimObjectSpec {
    Ball(BallSpec),
    Box(BoxSpec),
    Wall(WallSpec),
    Pyramid(PyramidSpec),
    Cone(ConeSpec),
    Cylinder(CylinderSpec),
    Perimeter(PerimeterSpec),
}

impl SimObjectSpec {
    pub fn from_json(text: &str) -> Result<Self, SpecError> {
        let value: Value = serde_json::from_str(text).map_err(|error| SpecError::Malformed {
            type_name: String::new(),
            reason: error.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Checks the discriminant before structural parsing so an unknown shape
    /// is reported as such and not as a generic serde failure.
    pub fn from_value(value: Value) -> Result<Self, SpecError> {
        let type_name = discriminant(&value)?;
        if !SIM_OBJECT_TYPES.contains(&type_name.as_str()) {
            return Err(SpecError::UnknownType { type_name });
        }
        ensure_fields(&type_name, &value, variant_fields(&type_name))?;
        let spec: SimObjectSpec =
            serde_json::from_value(value).map_err(|error| SpecError::Malformed {
                type_name,
                reason: error.to_string(),
            })?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SimObjectSpec::Ball(_) => "ball",
            SimObjectSpec::Box(_) => "box",
            SimObjectSpec::Wall(_) => "wall",
            SimObjectSpec::Pyramid(_) => "pyramid",
            SimObjectSpec::Cone(_) => "cone",
            SimObjectSpec::Cylinder(_) => "cylinder",
            SimObjectSpec::Perimeter(_) => "perimeter",
        }
    }

    /// Perimeter carries no common fields.
    pub fn base(&self) -> Option<&BaseSpec> {
        match self {
            SimObjectSpec::Ball(spec) => Some(&spec.base),
            SimObjectSpec::Box(spec) => Some(&spec.base),
            SimObjectSpec::Wall(spec) => Some(&spec.base),
            SimObjectSpec::Pyramid(spec) => Some(&spec.base),
            SimObjectSpec::Cone(spec) => Some(&spec.base),
            SimObjectSpec::Cylinder(spec) => Some(&spec.base),
            SimObjectSpec::Perimeter(_) => None,
        }
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        let name = self.type_name();
        if let Some(base) = self.base() {
            base.validate(name)?;
        }
        match self {
            SimObjectSpec::Ball(spec) => ensure_positive(name, "radius", spec.radius),
            SimObjectSpec::Box(spec) => {
                ensure_positive(name, "dimensions.x", spec.dimensions.x)?;
                ensure_positive(name, "dimensions.y", spec.dimensions.y)?;
                ensure_positive(name, "dimensions.z", spec.dimensions.z)
            }
            SimObjectSpec::Wall(spec) => {
                ensure_finite(name, "start.x", spec.start.x)?;
                ensure_finite(name, "start.y", spec.start.y)?;
                ensure_finite(name, "end.x", spec.end.x)?;
                ensure_finite(name, "end.y", spec.end.y)?;
                if spec.start == spec.end {
                    return Err(SpecError::InvalidGeometry {
                        type_name: name.to_string(),
                        field: "end".to_string(),
                        value: 0.0,
                    });
                }
                if let Some(thickness) = spec.thickness {
                    ensure_positive(name, "thickness", thickness)?;
                }
                if let Some(height) = spec.height {
                    ensure_positive(name, "height", height)?;
                }
                Ok(())
            }
            SimObjectSpec::Pyramid(spec) => {
                ensure_positive(name, "baseDimensions.x", spec.base_dimensions.x)?;
                ensure_positive(name, "baseDimensions.y", spec.base_dimensions.y)?;
                ensure_positive(name, "height", spec.height)
            }
            SimObjectSpec::Cone(spec) => {
                ensure_positive(name, "radius", spec.radius)?;
                ensure_positive(name, "height", spec.height)
            }
            SimObjectSpec::Cylinder(spec) => {
                ensure_positive(name, "radius", spec.radius)?;
                ensure_positive(name, "height", spec.height)
            }
            SimObjectSpec::Perimeter(spec) => {
                ensure_positive(name, "thickness", spec.thickness)?;
                ensure_positive(name, "height", spec.height)
            }
        }
    }
}

impl BaseSpec {
    fn validate(&self, name: &str) -> Result<(), SpecError> {
        if let Some(position) = self.initial_position {
            ensure_finite(name, "initialPosition.x", position.x)?;
            ensure_finite(name, "initialPosition.y", position.y)?;
        }
        if let Some(properties) = &self.physics_properties {
            let fields = [
                ("physicsProperties.linearDamping", properties.linear_damping),
                ("physicsProperties.angularDamping", properties.angular_damping),
                ("physicsProperties.density", properties.density),
                ("physicsProperties.friction", properties.friction),
                ("physicsProperties.restitution", properties.restitution),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    ensure_non_negative(name, field, value)?;
                }
            }
        }
        Ok(())
    }
}
