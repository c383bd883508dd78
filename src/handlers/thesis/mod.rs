// Thesis CRUD and workflow endpoints

pub mod by_status; // GET    /api/thesis/status/:status
pub mod by_user; //   GET    /api/thesis/user/:user_id
pub mod create; //    POST   /api/thesis
pub mod delete; //    DELETE /api/thesis/:id
pub mod list; //      GET    /api/thesis
pub mod show; //      GET    /api/thesis/:id
pub mod update; //    PUT    /api/thesis/:id

pub use by_status::thesis_by_status;
pub use by_user::thesis_by_user;
pub use create::thesis_create;
pub use delete::thesis_delete;
pub use list::thesis_list;
pub use show::thesis_show;
pub use update::thesis_update;
