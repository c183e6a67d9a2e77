// Domain modules: models/ hold the SQL, data/ hold the view-model shapes

pub mod artists;
pub mod shows;
pub mod venues;
