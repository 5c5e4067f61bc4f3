pub mod lattices;
