use super::*;

mod compile;
