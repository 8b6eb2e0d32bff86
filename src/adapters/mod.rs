pub mod backend_adapter;
