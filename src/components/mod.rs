//! The components module contains all shared components for our app. Components
//! are the building blocks of dioxus apps, used here for common UI elements
//! like buttons, form fields, and modals.
pub mod password_input;
pub mod pico;
