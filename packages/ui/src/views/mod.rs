mod users;
pub use users::UsersView;

mod user_detail;
pub use user_detail::UserDetailView;
