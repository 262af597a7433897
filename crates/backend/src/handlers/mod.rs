pub mod a001_resource;
