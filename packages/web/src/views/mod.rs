mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod guard;
pub use guard::{RequireAdmin, RequireSession};

mod console_layout;
pub use console_layout::ConsoleLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod resources;
pub use resources::{Articles, Projects, Reviews, Users};
