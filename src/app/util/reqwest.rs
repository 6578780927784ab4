use std::time::Duration;

pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .timeout(timeout)
        .pool_max_idle_per_host(std::usize::MAX)
        .build()
}
