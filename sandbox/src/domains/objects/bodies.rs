//! Engine-agnostic body and fixture descriptions.
//!
//! These mirror the `BodyDef` / `FixtureDef` pair of 2D rigid body engines so
//! an adapter can build the actual bodies without knowing about specs.

use serde::Serialize;

use crate::math::VectorMath;
use crate::objects::{PhysicsProperties, SimObjectSpec};

pub const DEFAULT_FRICTION: f32 = 0.2;
pub const DEFAULT_DENSITY: f32 = 1.0;
pub const DEFAULT_WALL_THICKNESS: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyType {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyDef {
    pub body_type: BodyType,
    pub position: [f32; 2],
    pub angle: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
}

impl BodyDef {
    pub fn new(body_type: BodyType, position: [f32; 2]) -> Self {
        Self {
            body_type,
            position,
            angle: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }

    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Circle {
        radius: f32,
        center: [f32; 2],
    },
    Box {
        half_extents: [f32; 2],
        center: [f32; 2],
        angle: f32,
    },
    Polygon {
        vertices: Vec<[f32; 2]>,
    },
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Shape::Circle {
            radius,
            center: [0.0, 0.0],
        }
    }

    pub fn rect(half_extents: [f32; 2]) -> Self {
        Shape::Box {
            half_extents,
            center: [0.0, 0.0],
            angle: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureDef {
    pub shape: Shape,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub is_sensor: bool,
}

impl FixtureDef {
    /// Static bodies get zero density, the engine treats them as infinitely heavy.
    pub fn solid(shape: Shape, body_type: BodyType) -> Self {
        Self {
            shape,
            density: match body_type {
                BodyType::Static => 0.0,
                BodyType::Dynamic => DEFAULT_DENSITY,
            },
            friction: DEFAULT_FRICTION,
            restitution: 0.0,
            is_sensor: false,
        }
    }

    /// Detection volume that reports overlaps without any collision response.
    pub fn sensor(shape: Shape) -> Self {
        Self {
            shape,
            density: 0.0,
            friction: 0.0,
            restitution: 0.0,
            is_sensor: true,
        }
    }
}

fn apply_properties(
    body: &mut BodyDef,
    fixtures: &mut [FixtureDef],
    properties: Option<&PhysicsProperties>,
) {
    let properties = match properties {
        Some(properties) => properties,
        None => return,
    };
    if let Some(damping) = properties.linear_damping {
        body.linear_damping = damping;
    }
    if let Some(damping) = properties.angular_damping {
        body.angular_damping = damping;
    }
    for fixture in fixtures.iter_mut() {
        if let Some(density) = properties.density {
            fixture.density = density;
        }
        if let Some(friction) = properties.friction {
            fixture.friction = friction;
        }
        if let Some(restitution) = properties.restitution {
            fixture.restitution = restitution;
        }
    }
}

/// Derives body and fixture descriptions from a validated spec.
///
/// Box footprints use the `x` and `z` dimensions, `y` is visual height only.
pub fn build_body(spec: &SimObjectSpec, field_size: [f32; 2]) -> (BodyDef, Vec<FixtureDef>) {
    let base = spec.base();
    let position = base
        .and_then(|base| base.initial_position)
        .map(<[f32; 2]>::from)
        .unwrap_or([0.0, 0.0]);
    let body_type = match base.and_then(|base| base.is_static) {
        Some(true) => BodyType::Static,
        _ => BodyType::Dynamic,
    };
    let (mut body, mut fixtures) = match spec {
        SimObjectSpec::Ball(ball) => (
            BodyDef::new(body_type, position),
            vec![FixtureDef::solid(Shape::circle(ball.radius), body_type)],
        ),
        SimObjectSpec::Box(cuboid) => {
            let half_extents = [cuboid.dimensions.x * 0.5, cuboid.dimensions.z * 0.5];
            (
                BodyDef::new(body_type, position),
                vec![FixtureDef::solid(Shape::rect(half_extents), body_type)],
            )
        }
        SimObjectSpec::Pyramid(pyramid) => {
            let half_extents = <[f32; 2]>::from(pyramid.base_dimensions).mul(0.5);
            (
                BodyDef::new(body_type, position),
                vec![FixtureDef::solid(Shape::rect(half_extents), body_type)],
            )
        }
        SimObjectSpec::Cone(cone) => (
            BodyDef::new(body_type, position),
            vec![FixtureDef::solid(Shape::circle(cone.radius), body_type)],
        ),
        SimObjectSpec::Cylinder(cylinder) => (
            BodyDef::new(body_type, position),
            vec![FixtureDef::solid(Shape::circle(cylinder.radius), body_type)],
        ),
        SimObjectSpec::Wall(wall) => {
            let start = <[f32; 2]>::from(wall.start);
            let end = <[f32; 2]>::from(wall.end);
            let thickness = wall.thickness.unwrap_or(DEFAULT_WALL_THICKNESS);
            let mut body = BodyDef::new(BodyType::Static, start.midpoint(end));
            body.angle = start.angle_to(end);
            let half_extents = [start.distance(end) * 0.5, thickness * 0.5];
            let fixture = FixtureDef::solid(Shape::rect(half_extents), BodyType::Static);
            (body, vec![fixture])
        }
        SimObjectSpec::Perimeter(perimeter) => (
            BodyDef::new(BodyType::Static, [0.0, 0.0]),
            perimeter_fixtures(field_size, perimeter.thickness),
        ),
    };
    let properties = base.and_then(|base| base.physics_properties.as_ref());
    apply_properties(&mut body, &mut fixtures, properties);
    (body, fixtures)
}

/// Four walls hugging the outside of a field centered at the origin.
fn perimeter_fixtures(field_size: [f32; 2], thickness: f32) -> Vec<FixtureDef> {
    let [half_width, half_height] = field_size.mul(0.5);
    let offset = thickness * 0.5;
    let horizontal = [half_width + thickness, offset];
    let vertical = [offset, half_height];
    let walls = [
        ([0.0, half_height + offset], horizontal),
        ([0.0, -(half_height + offset)], horizontal),
        ([-(half_width + offset), 0.0], vertical),
        ([half_width + offset, 0.0], vertical),
    ];
    walls
        .into_iter()
        .map(|(center, half_extents)| {
            let shape = Shape::Box {
                half_extents,
                center,
                angle: 0.0,
            };
            FixtureDef::solid(shape, BodyType::Static)
        })
        .collect()
}
