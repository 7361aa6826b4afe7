pub mod chart_board;
pub mod density_chart;
pub mod draggable_dish;
pub mod placement_area;
pub mod result_marker;
pub mod results;

pub use chart_board::ChartBoard;
pub use density_chart::DensityChart;
pub use draggable_dish::DraggableDish;
pub use placement_area::PlacementArea;
pub use result_marker::ResultMarker;
pub use results::ResultsView;
