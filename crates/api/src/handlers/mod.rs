pub mod cellar;
pub mod layouts;
pub mod wines;
