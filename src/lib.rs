// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
pub mod commands;
pub mod entries;
pub mod errors;
pub mod persistence;
pub mod plotter;
pub mod symbolic;
