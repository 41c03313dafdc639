pub mod assignments;
pub mod courses;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod profile;
pub mod signup;

pub use assignments::AssignmentsPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;
