use crate::bus::Transport;
use crate::config::{Config, InputStatus, OutputConfig};
use crate::driver::Tca95x5;
use crate::error::ConfigError;

/// Common interface for mutex implementations.
///
/// A [`Tca95x5`] handle is not synchronized in any way: two contexts driving the same chip must
/// not interleave their transfers.  [`SharedTca95x5`] wraps a handle in a mutex implementing this
/// trait and runs whole operations under the lock.  `tca95x5` implements this trait for a number of existing mutex types.  Most of them are
/// guarded by a feature that needs to be enabled.  Here is an overview:
///
/// | Mutex | Feature Name | Notes |
/// | --- | --- | --- |
/// | [`core::cell::RefCell`] | _always available_ | For sharing within a single execution context. |
/// | [`std::sync::Mutex`][mutex-std] | `std` | For platforms where `std` is available. |
/// | [`critical_section::Mutex`][mutex-cs] | `critical-section` | Shared with interrupt handlers. |
///
/// [mutex-std]: https://doc.rust-lang.org/std/sync/struct.Mutex.html
/// [mutex-cs]: https://docs.rs/critical-section/latest/critical_section/struct.Mutex.html
///
/// For other mutex types, a custom implementation is needed.  Due to the orphan rule, it might be
/// necessary to wrap it in a newtype.  As an example, this is what such a custom implementation
/// might look like:
///
/// ```
/// struct MyMutex<T>(std::sync::Mutex<T>);
///
/// impl<T> tca95x5::DeviceMutex for MyMutex<T> {
///     type Device = T;
///
///     fn create(v: T) -> Self {
///         Self(std::sync::Mutex::new(v))
///     }
///
///     fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
///         let mut v = self.0.lock().unwrap();
///         f(&mut v)
///     }
/// }
/// ```
pub trait DeviceMutex {
    /// The device handle wrapped inside this mutex.
    type Device;

    /// Create a new mutex of this type.
    fn create(v: Self::Device) -> Self;

    /// Lock the mutex and give a closure access to the device inside.
    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R;
}

impl<T> DeviceMutex for core::cell::RefCell<T> {
    type Device = T;

    fn create(v: Self::Device) -> Self {
        core::cell::RefCell::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
        let mut v = self.borrow_mut();
        f(&mut v)
    }
}

#[cfg(any(test, feature = "std"))]
impl<T> DeviceMutex for std::sync::Mutex<T> {
    type Device = T;

    fn create(v: Self::Device) -> Self {
        std::sync::Mutex::new(v)
    }

    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
        let mut v = match self.lock() {
            Ok(v) => v,
            // the holder panicked mid-transfer, chip state is unknown
            Err(_) => panic!("tca95x5 device mutex poisoned"),
        };
        f(&mut v)
    }
}

#[cfg(feature = "critical-section")]
impl<T> DeviceMutex for critical_section::Mutex<core::cell::RefCell<T>> {
    type Device = T;

    fn create(v: Self::Device) -> Self {
        critical_section::Mutex::new(core::cell::RefCell::new(v))
    }

    fn lock<R, F: FnOnce(&mut Self::Device) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| {
            let mut v = self.borrow_ref_mut(cs);
            f(&mut v)
        })
    }
}

/// A [`Tca95x5`] handle shared between several contexts.
///
/// Every method locks the mutex for the whole operation, so read-modify-write sequences from
/// different contexts cannot interleave on the bus.
pub struct SharedTca95x5<M>(M);

impl<T: Transport> SharedTca95x5<core::cell::RefCell<Tca95x5<T>>> {
    pub fn new(tca: Tca95x5<T>) -> Self {
        Self::with_mutex(tca)
    }
}

impl<T, M> SharedTca95x5<M>
where
    T: Transport,
    M: DeviceMutex<Device = Tca95x5<T>>,
{
    pub fn with_mutex(tca: Tca95x5<T>) -> Self {
        Self(M::create(tca))
    }

    /// Run `f` with exclusive access to the handle.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Tca95x5<T>) -> R) -> R {
        self.0.lock(f)
    }

    /// Read the full configuration, let `f` modify it and write it back, all under one lock.
    pub fn update_config(&self, f: impl FnOnce(&mut Config)) -> Result<(), ConfigError<T::Error>> {
        self.0.lock(|tca| {
            let mut config = tca.get_config()?;
            f(&mut config);
            tca.write_all_config(&config)
        })
    }

    /// Like [`update_config()`][Self::update_config] but only touches the output group.
    pub fn update_output(&self, f: impl FnOnce(&mut OutputConfig)) -> Result<(), T::Error> {
        self.0.lock(|tca| {
            let mut output = tca.get_output_config()?;
            f(&mut output);
            tca.write_config(&output)
        })
    }

    pub fn get_input_status(&self) -> Result<InputStatus, T::Error> {
        self.0.lock(|tca| tca.get_input_status())
    }
}
