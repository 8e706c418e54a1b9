pub mod pomodoro;
pub mod task_store;
