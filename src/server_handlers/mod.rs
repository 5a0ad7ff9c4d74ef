pub mod proyectos;
pub mod ventas;
pub mod docs;

pub use proyectos::*;
pub use ventas::*;
pub use docs::*;
