pub mod transiter;
