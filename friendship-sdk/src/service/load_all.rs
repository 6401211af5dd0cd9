use std::rc::Rc;

use futures::channel::mpsc;
use futures::task::{LocalSpawn, LocalSpawnExt};
use futures::StreamExt;

use crate::error::{Error, Result};
use crate::model::friend::FriendshipStatus;
use crate::state::SharedStore;

use super::FriendFetcher;

/// the three lists after a successful initial load, keyed by role
#[derive(Debug, Clone)]
pub struct LoadAll {
    pub current: SharedStore,
    pub pending: SharedStore,
    pub unknown: SharedStore,
}

/// startup load of current, pending and unknown users
#[derive(Clone)]
pub struct AggregateLoader {
    fetcher: FriendFetcher,
    spawner: Rc<dyn LocalSpawn>,
}

impl AggregateLoader {
    pub fn new(fetcher: FriendFetcher, spawner: Rc<dyn LocalSpawn>) -> Self {
        Self { fetcher, spawner }
    }

    /// dispatch the three fetches as independent tasks and join them.
    ///
    /// the first failure is returned as soon as it arrives. the other fetches keep running
    /// on their tasks and still write their lists when they succeed
    pub async fn load_all(&self) -> Result<LoadAll> {
        let (tx, mut rx) = mpsc::unbounded();
        for status in [
            FriendshipStatus::Accepted,
            FriendshipStatus::Pending,
            FriendshipStatus::Unknown,
        ] {
            let fetcher = self.fetcher.clone();
            let tx = tx.clone();
            self.spawner
                .spawn_local(async move {
                    let res = fetcher.fetch(status.tag()).await;
                    // the join is gone once it returned an error
                    let _ = tx.unbounded_send((status, res));
                })
                .map_err(|err| Error::network(None, format!("dispatch fetch error: {err}")))?;
        }
        drop(tx);

        let mut current = None;
        let mut pending = None;
        let mut unknown = None;
        while let Some((status, res)) = rx.next().await {
            let store = res?;
            match status {
                FriendshipStatus::Accepted => current = Some(store),
                FriendshipStatus::Pending => pending = Some(store),
                FriendshipStatus::Unknown => unknown = Some(store),
            }
            if let (Some(current), Some(pending), Some(unknown)) = (&current, &pending, &unknown)
            {
                log::debug!("friendship lists loaded");
                return Ok(LoadAll {
                    current: current.clone(),
                    pending: pending.clone(),
                    unknown: unknown.clone(),
                });
            }
        }
        Err(Error::network(None, "fetch task dropped before answering"))
    }
}

#[cfg(test)]
mod test {
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll};

    use futures::executor::LocalPool;
    use futures::task::noop_waker;

    use super::*;
    use crate::service::stub::{names, shared_store, users, StubApi};

    fn loader(api: &Rc<StubApi>, pool: &LocalPool) -> AggregateLoader {
        AggregateLoader::new(
            FriendFetcher::new(api.clone(), shared_store("alice")),
            Rc::new(pool.spawner()),
        )
    }

    #[test]
    fn test_load_all_fills_three_lists() {
        let mut pool = LocalPool::new();
        let api = Rc::new(StubApi::default());
        let tx_current = api.park(Some("A"));
        let tx_pending = api.park(Some("P"));
        let tx_unknown = api.park(None);
        let loader = loader(&api, &pool);

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = pin!(loader.load_all());

        assert!(fut.as_mut().poll(&mut cx).is_pending());
        pool.run_until_stalled();
        // all three are in flight before any answered
        assert_eq!(api.list_calls().len(), 3);

        tx_unknown.send(Ok(users(&["erin"]))).unwrap();
        pool.run_until_stalled();
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        tx_current.send(Ok(users(&["bob"]))).unwrap();
        pool.run_until_stalled();
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        tx_pending.send(Ok(users(&["carol"]))).unwrap();
        pool.run_until_stalled();

        let Poll::Ready(Ok(loaded)) = fut.as_mut().poll(&mut cx) else {
            panic!("load_all should be done once all three answered");
        };
        assert!(Rc::ptr_eq(&loaded.current, &loaded.unknown));
        let store = loaded.pending.borrow();
        assert_eq!(names(store.current()), vec!["bob"]);
        assert_eq!(names(store.pending()), vec!["carol"]);
        assert_eq!(names(store.unknown()), vec!["erin"]);
        drop(store);

        let mut calls = api.list_calls();
        calls.sort();
        assert_eq!(
            calls,
            vec![None, Some("A".to_string()), Some("P".to_string())]
        );
    }

    #[test]
    fn test_load_all_fails_on_first_error() {
        let mut pool = LocalPool::new();
        let api = Rc::new(StubApi::default());
        let tx_current = api.park(Some("A"));
        let tx_pending = api.park(Some("P"));
        let tx_unknown = api.park(None);
        let loader = loader(&api, &pool);

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = pin!(loader.load_all());
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        pool.run_until_stalled();

        tx_pending
            .send(Err(Error::network(Some(401), "not authenticated")))
            .unwrap();
        pool.run_until_stalled();

        // the other two are still parked, the failure is reported anyway
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(Err(err)) => {
                assert_eq!(err, Error::network(Some(401), "not authenticated"))
            }
            _ => panic!("load_all should fail as soon as one fetch failed"),
        }

        // the siblings still run to completion and keep their lists
        tx_current.send(Ok(users(&["bob"]))).unwrap();
        tx_unknown
            .send(Err(Error::network(Some(500), "later failure")))
            .unwrap();
        pool.run_until_stalled();

        let store = loader.fetcher.store();
        assert_eq!(names(store.borrow().current()), vec!["bob"]);
        assert!(store.borrow().pending().is_empty());
        assert!(store.borrow().unknown().is_empty());
    }
}
