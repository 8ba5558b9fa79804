//! Workspace-level integration tests for SmoothPlot live in `tests/`.
