use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};

/// runs sdk tasks on the browser event loop
#[derive(Debug, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
