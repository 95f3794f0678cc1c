mod all;
mod apiaries;
mod apiary_detail;
mod drawer;
mod fields;
mod footer;
mod forgot_password;
mod harvest;
mod hive_detail;
mod home;
mod login;
mod modals;
mod new_password;
mod profile;
mod register;
mod settings;

use super::{Frame, Theme};

pub use all::all as render;
