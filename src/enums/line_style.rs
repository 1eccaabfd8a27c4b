#[doc = "Marker and stroke combination of one line series"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Circle markers, solid line
    #[default]
    CircleSolid,
    /// Square markers, dashed line
    SquareDashed,
    /// Cross markers, dash-dot line
    CrossDashDot,
}
