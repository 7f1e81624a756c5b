//! Bar layout variants
//!
//! The chrome bar is pinned to one screen edge. Each edge fixes a set of
//! geometry rules: which two edges are pinned, whether children flow as a
//! row or a column, and which edge carries the emphasized (dashed)
//! stroke. The mapping from position to variant is one-to-one and
//! deterministic.

/// Pinned screen edge of the chrome bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarPosition {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl BarPosition {
    /// Stable position id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Parse a position id. Unknown ids return `None`; defaulting is the
    /// resolver's job, not the parser's.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "top" => Some(Self::Top),
            "right" => Some(Self::Right),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            _ => None,
        }
    }

    /// Full position list.
    pub fn all() -> &'static [BarPosition] {
        const POSITIONS: [BarPosition; 4] = [
            BarPosition::Top,
            BarPosition::Right,
            BarPosition::Bottom,
            BarPosition::Left,
        ];
        &POSITIONS
    }
}

/// One geometric edge of the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Main axis for the bar's children
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal bars (top, bottom)
    Row,
    /// Vertical bars (left, right)
    Column,
}

/// Geometry rules derived from a bar position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutVariant {
    /// The screen edge this variant belongs to
    pub edge: Edge,
    /// Flow direction for children
    pub orientation: Orientation,
    /// The edge carrying the emphasized stroke
    pub border_edge: Edge,
    /// The two pinned edges; the bar spans the full viewport along its
    /// main axis
    pub pinned: (Edge, Edge),
}

impl LayoutVariant {
    /// The variant for a known position.
    pub fn for_position(position: BarPosition) -> Self {
        match position {
            BarPosition::Top => Self {
                edge: Edge::Top,
                orientation: Orientation::Row,
                border_edge: Edge::Top,
                pinned: (Edge::Top, Edge::Left),
            },
            BarPosition::Right => Self {
                edge: Edge::Right,
                orientation: Orientation::Column,
                border_edge: Edge::Right,
                pinned: (Edge::Top, Edge::Right),
            },
            BarPosition::Bottom => Self {
                edge: Edge::Bottom,
                orientation: Orientation::Row,
                border_edge: Edge::Bottom,
                pinned: (Edge::Bottom, Edge::Left),
            },
            BarPosition::Left => Self {
                edge: Edge::Left,
                orientation: Orientation::Column,
                border_edge: Edge::Left,
                pinned: (Edge::Top, Edge::Left),
            },
        }
    }

    /// Resolve a position selector onto a variant.
    ///
    /// Anything outside the four known ids maps to the `bottom` variant,
    /// mirroring the theme resolver's fallback-to-default policy.
    pub fn resolve(position: &str) -> Self {
        match BarPosition::from_id(position) {
            Some(known) => Self::for_position(known),
            None => {
                tracing::debug!(position, "unknown bar position, using bottom");
                Self::for_position(BarPosition::Bottom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_ids_roundtrip() {
        for position in BarPosition::all() {
            assert_eq!(BarPosition::from_id(position.id()), Some(*position));
        }
        assert_eq!(BarPosition::from_id("center"), None);
    }

    #[test]
    fn each_position_pins_its_own_edge() {
        for position in BarPosition::all() {
            let variant = LayoutVariant::for_position(*position);
            let expected = match position {
                BarPosition::Top => Edge::Top,
                BarPosition::Right => Edge::Right,
                BarPosition::Bottom => Edge::Bottom,
                BarPosition::Left => Edge::Left,
            };
            assert_eq!(variant.edge, expected);
            assert!(
                variant.pinned.0 == expected || variant.pinned.1 == expected,
                "{position:?} should pin its own edge",
            );
        }
    }

    #[test]
    fn horizontal_bars_are_rows_vertical_bars_are_columns() {
        assert_eq!(
            LayoutVariant::for_position(BarPosition::Top).orientation,
            Orientation::Row
        );
        assert_eq!(
            LayoutVariant::for_position(BarPosition::Bottom).orientation,
            Orientation::Row
        );
        assert_eq!(
            LayoutVariant::for_position(BarPosition::Left).orientation,
            Orientation::Column
        );
        assert_eq!(
            LayoutVariant::for_position(BarPosition::Right).orientation,
            Orientation::Column
        );
    }

    #[test]
    fn border_edge_matches_pinned_edge() {
        for position in BarPosition::all() {
            let variant = LayoutVariant::for_position(*position);
            assert_eq!(variant.border_edge, variant.edge);
        }
    }

    #[test]
    fn unknown_position_resolves_to_bottom() {
        let bottom = LayoutVariant::for_position(BarPosition::Bottom);
        for selector in ["center", "TOP", "", "42"] {
            assert_eq!(LayoutVariant::resolve(selector), bottom);
        }
    }

    #[test]
    fn known_positions_resolve_to_themselves() {
        for position in BarPosition::all() {
            assert_eq!(
                LayoutVariant::resolve(position.id()),
                LayoutVariant::for_position(*position),
            );
        }
    }
}
