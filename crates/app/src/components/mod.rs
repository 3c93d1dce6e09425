mod badge;
mod card;
mod input;

pub use badge::{Badge, BadgeVariant};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use input::Input;
