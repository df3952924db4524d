/*
 * space.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The attribute space a schema describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    #[default]
    Html,
    Svg,
}

/// Error returned when parsing an unrecognized space name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown space `{0}`, expected `html` or `svg`")]
pub struct ParseSpaceError(String);

impl FromStr for Space {
    type Err = ParseSpaceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "html" => Ok(Space::Html),
            "svg" => Ok(Space::Svg),
            other => Err(ParseSpaceError(other.to_string())),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Html => write!(formatter, "html"),
            Space::Svg => write!(formatter, "svg"),
        }
    }
}
