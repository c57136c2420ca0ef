use std::fmt;
use thiserror::Error;

/// Which of the three reference points a fault refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceRole {
    Center,
    Start,
    End,
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceRole::Center => "center",
            ReferenceRole::Start => "start",
            ReferenceRole::End => "end",
        };
        f.write_str(name)
    }
}

/// The geometric reason a layout pass could not produce poses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Degeneracy {
    #[error("start coincides with center (zero radius)")]
    ZeroRadius,
    #[error("end direction is undefined (end coincides with center)")]
    ZeroEndDirection,
    #[error("look-at source coincides with its target")]
    LookAtCoincident,
    #[error("start and end are collinear with center, arc normal is undefined")]
    CollinearArc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A reference point is unset or no longer part of the container.
    #[error("reference point `{0}` is not configured")]
    ConfigurationMissing(ReferenceRole),
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] Degeneracy),
}
