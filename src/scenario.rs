use std::{io::Read, path::Path};

use geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One geometry question read from a scenario file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    HasIntersection {
        a: Rect,
        b: Rect,
    },
    Intersection {
        a: Rect,
        b: Rect,
    },
    IntersectionLine {
        rect: Rect,
        from: Point,
        to: Point,
    },
    Union {
        a: Rect,
        b: Rect,
    },
    ContainsPoint {
        rect: Rect,
        point: Point,
    },
    EnclosePoints {
        points: Vec<Point>,
        #[serde(default)]
        clip: Option<Rect>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Bool(bool),
    Rect(Option<Rect>),
    Line(Option<(Point, Point)>),
}

#[derive(Debug)]
pub enum LoadError {
    IoError(std::io::Error),
    JsonError(serde_json::error::Error),
}

pub fn load_scenario(path: &Path) -> Result<Vec<Query>, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::IoError)?;
    parse_scenario(file)
}

pub fn parse_scenario<R: Read>(reader: R) -> Result<Vec<Query>, LoadError> {
    serde_json::from_reader(reader).map_err(LoadError::JsonError)
}

impl Query {
    pub fn evaluate(&self) -> Outcome {
        match self {
            Query::HasIntersection { a, b } => Outcome::Bool(a.has_intersection(b)),
            Query::Intersection { a, b } => Outcome::Rect(a.intersection(b)),
            Query::IntersectionLine { rect, from, to } => {
                Outcome::Line(rect.intersection_line(*from, *to))
            }
            Query::Union { a, b } => Outcome::Rect(Some(a.union(b))),
            Query::ContainsPoint { rect, point } => Outcome::Bool(rect.contains_point(*point)),
            Query::EnclosePoints { points, clip } => {
                Outcome::Rect(Rect::enclose_points(points, clip.as_ref()))
            }
        }
    }
}
