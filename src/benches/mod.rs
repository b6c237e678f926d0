pub mod arraylab;
