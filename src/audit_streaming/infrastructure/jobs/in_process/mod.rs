pub mod tokio_streaming_job_queue_impl;
