use digraph_core::format::OutputFormat;
use digraph_core::graph::PathReconstruction;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse path reconstruction mode from string
pub fn parse_path_reconstruction(s: &str) -> std::result::Result<PathReconstruction, String> {
    s.parse::<PathReconstruction>()
}
