pub mod dashboard_renderer;
