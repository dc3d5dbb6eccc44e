mod charts;
mod dashboard;
mod index;
mod login;
mod state;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use charts::{DonutChart, LineChart};
pub use dashboard::DashboardView;
pub use index::IndexView;
pub use login::{LoginView, TEST_EMAIL, TEST_PASSWORD};
pub use state::{ViewError, ViewState, view_state_from_resource};
