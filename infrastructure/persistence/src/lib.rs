pub mod db;
mod numeric;
pub mod gift {
    pub mod entity;
    pub mod repository;
}
pub mod preferences {
    pub mod entity;
    pub mod repository;
}
pub mod selection {
    pub mod entity;
    pub mod repository;
}
