pub mod in_process;
pub mod streaming_job_dispatcher;
