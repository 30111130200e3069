mod sqrt_check_task;

pub use sqrt_check_task::SqrtCheckTask;
