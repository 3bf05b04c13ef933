use std::sync::OnceLock;

/// Background runtime for the catalog read and cover fetches. Built on first use.
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

pub fn rt() -> &'static tokio::runtime::Runtime {
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("gallery-io")
            .enable_all()
            .build()
            .expect("tokio runtime")
    })
}
