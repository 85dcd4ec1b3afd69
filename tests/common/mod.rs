#![allow(dead_code)]

pub mod fixtures {
    use std::any::Any;

    use navrouter::{
        BoxedParams, BoxedScreen, ContainerScreen, MemoryStack, NavHandle, Navigator,
        RuntimeConfig, Screen, ScreenId,
    };
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    pub struct ProfileParams {
        pub id: String,
    }

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    pub struct PagingParams {
        pub page: u32,
        pub per_page: u32,
    }

    /// Screen that records everything handed to it.
    pub struct ProfileScreen {
        pub id: ScreenId,
        pub params: Option<BoxedParams>,
        pub nav: NavHandle,
    }

    impl Screen for ProfileScreen {
        fn new(navigator: NavHandle, params: Option<BoxedParams>) -> Option<Self> {
            Some(ProfileScreen {
                id: ScreenId::new(),
                params,
                nav: navigator,
            })
        }

        fn id(&self) -> ScreenId {
            self.id
        }

        fn set_navigator(&mut self, navigator: NavHandle) {
            self.nav = navigator;
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    pub struct HomeScreen {
        pub id: ScreenId,
    }

    impl Screen for HomeScreen {
        fn new(_navigator: NavHandle, _params: Option<BoxedParams>) -> Option<Self> {
            Some(HomeScreen { id: ScreenId::new() })
        }

        fn id(&self) -> ScreenId {
            self.id
        }

        fn set_navigator(&mut self, _navigator: NavHandle) {}

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    /// Screen that refuses to come up without a parameter object.
    pub struct StrictScreen {
        pub id: ScreenId,
    }

    impl Screen for StrictScreen {
        fn new(_navigator: NavHandle, params: Option<BoxedParams>) -> Option<Self> {
            params.map(|_| StrictScreen { id: ScreenId::new() })
        }

        fn id(&self) -> ScreenId {
            self.id
        }

        fn set_navigator(&mut self, _navigator: NavHandle) {}

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    /// Container standing in for a platform navigation controller.
    pub struct NavContainer {
        pub id: ScreenId,
        pub root: BoxedScreen,
    }

    impl Screen for NavContainer {
        fn new(_navigator: NavHandle, _params: Option<BoxedParams>) -> Option<Self> {
            None
        }

        fn id(&self) -> ScreenId {
            self.id
        }

        fn set_navigator(&mut self, _navigator: NavHandle) {}

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    impl ContainerScreen for NavContainer {
        fn wrap(root: BoxedScreen) -> Option<Self> {
            Some(NavContainer {
                id: ScreenId::new(),
                root,
            })
        }
    }

    /// Navigator over a fresh in-memory stack, configured explicitly so
    /// tests stay independent of the environment.
    pub fn test_navigator() -> Navigator {
        Navigator::with_config(MemoryStack::boxed(), RuntimeConfig::default())
    }

    pub fn test_navigator_with(config: RuntimeConfig) -> Navigator {
        Navigator::with_config(MemoryStack::boxed(), config)
    }
}

pub mod delegates {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use navrouter::{NavigatorDelegate, Screen, ScreenId};

    /// Delegate with configurable answers that records what it was asked.
    pub struct RecordingDelegate {
        pub allow_present: bool,
        pub allow_push: bool,
        pub present_anchors: Mutex<Vec<ScreenId>>,
        pub push_calls: AtomicUsize,
    }

    impl RecordingDelegate {
        pub fn allowing() -> Arc<Self> {
            Self::new(true, true)
        }

        pub fn denying() -> Arc<Self> {
            Self::new(false, false)
        }

        pub fn new(allow_present: bool, allow_push: bool) -> Arc<Self> {
            Arc::new(RecordingDelegate {
                allow_present,
                allow_push,
                present_anchors: Mutex::new(Vec::new()),
                push_calls: AtomicUsize::new(0),
            })
        }

        pub fn anchors(&self) -> Vec<ScreenId> {
            self.present_anchors.lock().unwrap().clone()
        }
    }

    impl NavigatorDelegate for RecordingDelegate {
        fn should_present(&self, _screen: &dyn Screen, from: ScreenId) -> bool {
            self.present_anchors.lock().unwrap().push(from);
            self.allow_present
        }

        fn should_push(&self, _screen: &dyn Screen) -> bool {
            self.push_calls.fetch_add(1, Ordering::SeqCst);
            self.allow_push
        }
    }
}
