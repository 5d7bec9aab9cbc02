pub mod osc;
