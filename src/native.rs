use crate::convert;
use crate::ffi::{self, Api, RawAllControllerData, RawControllerData, SIXENSE_SUCCESS};
use crate::sdk::{self, Sdk};
use crate::types::{BaseColor, ControllerSample, FilterParams};
use crate::{Result, SixenseError};
use libloading::Library;
use std::ffi::{c_int, c_uchar};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The vendor Sixense library, loaded at runtime.
///
/// The SDK keeps process-wide state, so only one `NativeSdk` should be
/// initialized at a time. Wrap it in a `Session` to get `init`/`exit` pairing.
pub struct NativeSdk {
    api: Api,
    path: PathBuf,
    /// Keeps the resolved function pointers valid.
    _library: Library,
}

impl NativeSdk {
    /// Load the library from `path`, or search the platform's default names
    /// (`ffi::LIBRARY_NAMES`) through the dynamic loader when `None`.
    pub fn load(path: Option<&Path>) -> Result<NativeSdk> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_default(),
        }
    }

    /// Load the library from an explicit path.
    pub fn load_from(path: &Path) -> Result<NativeSdk> {
        // SAFETY: loading the vendor library runs its initializers; the
        // Sixense SDK has none beyond static setup.
        let library = unsafe { Library::new(path)? };
        let api = resolve(&library)?;
        log::info!("Loaded Sixense library from {}", path.display());
        Ok(NativeSdk {
            api,
            path: path.to_path_buf(),
            _library: library,
        })
    }

    fn load_default() -> Result<NativeSdk> {
        for name in ffi::LIBRARY_NAMES {
            log::debug!("Trying Sixense library {}", name);
            // SAFETY: see `load_from`.
            match unsafe { Library::new(name) } {
                Ok(library) => {
                    let api = resolve(&library)?;
                    log::info!("Loaded Sixense library {}", name);
                    return Ok(NativeSdk {
                        api,
                        path: PathBuf::from(name),
                        _library: library,
                    });
                }
                Err(e) => log::debug!("{}: {}", name, e),
            }
        }
        Err(SixenseError::LibraryNotFound(ffi::LIBRARY_NAMES.join(", ")))
    }

    /// Path or file name the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve one symbol and copy the function pointer out of the library.
///
/// # Safety
/// `T` must match the C signature of `name`.
unsafe fn symbol<T: Copy>(library: &Library, name: &str) -> Result<T> {
    let mut cname = Vec::with_capacity(name.len() + 1);
    cname.extend_from_slice(name.as_bytes());
    cname.push(0);
    library
        .get::<T>(&cname)
        .map(|s| *s)
        .map_err(|source| SixenseError::MissingSymbol {
            name: name.to_string(),
            source,
        })
}

fn resolve(library: &Library) -> Result<Api> {
    // SAFETY: every type below is the `sixense.h` prototype of the symbol.
    unsafe {
        Ok(Api {
            init: symbol(library, "sixenseInit")?,
            exit: symbol(library, "sixenseExit")?,
            get_max_bases: symbol(library, "sixenseGetMaxBases")?,
            set_active_base: symbol(library, "sixenseSetActiveBase")?,
            is_base_connected: symbol(library, "sixenseIsBaseConnected")?,
            get_max_controllers: symbol(library, "sixenseGetMaxControllers")?,
            is_controller_enabled: symbol(library, "sixenseIsControllerEnabled")?,
            get_num_active_controllers: symbol(library, "sixenseGetNumActiveControllers")?,
            get_history_size: symbol(library, "sixenseGetHistorySize")?,
            get_data: symbol(library, "sixenseGetData")?,
            get_all_data: symbol(library, "sixenseGetAllData")?,
            get_newest_data: symbol(library, "sixenseGetNewestData")?,
            get_all_newest_data: symbol(library, "sixenseGetAllNewestData")?,
            set_hemisphere_tracking_mode: symbol(library, "sixenseSetHemisphereTrackingMode")?,
            get_hemisphere_tracking_mode: symbol(library, "sixenseGetHemisphereTrackingMode")?,
            auto_enable_hemisphere_tracking: symbol(
                library,
                "sixenseAutoEnableHemisphereTracking",
            )?,
            set_high_priority_binding_enabled: symbol(
                library,
                "sixenseSetHighPriorityBindingEnabled",
            )?,
            get_high_priority_binding_enabled: symbol(
                library,
                "sixenseGetHighPriorityBindingEnabled",
            )?,
            trigger_vibration: symbol(library, "sixenseTriggerVibration")?,
            set_filter_enabled: symbol(library, "sixenseSetFilterEnabled")?,
            get_filter_enabled: symbol(library, "sixenseGetFilterEnabled")?,
            set_filter_params: symbol(library, "sixenseSetFilterParams")?,
            get_filter_params: symbol(library, "sixenseGetFilterParams")?,
            set_base_color: symbol(library, "sixenseSetBaseColor")?,
            get_base_color: symbol(library, "sixenseGetBaseColor")?,
        })
    }
}

/// Map a Sixense status code to a `Result`.
pub(crate) fn check(op: &'static str, status: c_int) -> Result<()> {
    if status == SIXENSE_SUCCESS {
        Ok(())
    } else {
        Err(SixenseError::Call { op, status })
    }
}

fn to_index(value: usize) -> c_int {
    c_int::try_from(value).unwrap_or(c_int::MAX)
}

fn to_count(value: c_int) -> usize {
    usize::try_from(value).unwrap_or(0)
}

impl Sdk for NativeSdk {
    fn init(&self) -> Result<()> {
        // SAFETY: no preconditions.
        check("sixenseInit", unsafe { (self.api.init)() })
    }

    fn exit(&self) -> Result<()> {
        // SAFETY: no preconditions.
        check("sixenseExit", unsafe { (self.api.exit)() })
    }

    fn max_bases(&self) -> usize {
        // SAFETY: no arguments.
        to_count(unsafe { (self.api.get_max_bases)() })
    }

    fn is_base_connected(&self, base: usize) -> bool {
        // SAFETY: the SDK range-checks `base` and reports 0 when out of range.
        unsafe { (self.api.is_base_connected)(to_index(base)) != 0 }
    }

    fn set_active_base(&self, base: usize) -> Result<()> {
        // SAFETY: the SDK range-checks `base` and returns a failure status.
        check("sixenseSetActiveBase", unsafe {
            (self.api.set_active_base)(to_index(base))
        })
    }

    fn max_controllers(&self) -> usize {
        // SAFETY: no arguments.
        to_count(unsafe { (self.api.get_max_controllers)() })
    }

    fn is_controller_enabled(&self, which: usize) -> bool {
        // SAFETY: the SDK range-checks `which` and reports 0 when out of range.
        unsafe { (self.api.is_controller_enabled)(to_index(which)) != 0 }
    }

    fn num_active_controllers(&self) -> usize {
        // SAFETY: no arguments.
        to_count(unsafe { (self.api.get_num_active_controllers)() })
    }

    fn history_size(&self) -> usize {
        // SAFETY: no arguments.
        to_count(unsafe { (self.api.get_history_size)() })
    }

    fn data(&self, which: usize, index_back: usize) -> Result<ControllerSample> {
        let mut raw = RawControllerData::default();
        // SAFETY: `raw` is a valid, writable `sixenseControllerData`.
        let status =
            unsafe { (self.api.get_data)(to_index(which), to_index(index_back), &mut raw) };
        check("sixenseGetData", status)?;
        Ok(ControllerSample::from(&raw))
    }

    fn all_data(&self, index_back: usize) -> Result<Vec<ControllerSample>> {
        let mut raw = RawAllControllerData::default();
        // SAFETY: `raw` is a valid, writable `sixenseAllControllerData`.
        let status = unsafe { (self.api.get_all_data)(to_index(index_back), &mut raw) };
        check("sixenseGetAllData", status)?;
        Ok(convert::all_samples(&raw))
    }

    fn newest_data(&self, which: usize) -> Result<ControllerSample> {
        let mut raw = RawControllerData::default();
        // SAFETY: `raw` is a valid, writable `sixenseControllerData`.
        let status = unsafe { (self.api.get_newest_data)(to_index(which), &mut raw) };
        check("sixenseGetNewestData", status)?;
        Ok(ControllerSample::from(&raw))
    }

    fn all_newest_data(&self) -> Result<Vec<ControllerSample>> {
        let mut raw = RawAllControllerData::default();
        // SAFETY: `raw` is a valid, writable `sixenseAllControllerData`.
        let status = unsafe { (self.api.get_all_newest_data)(&mut raw) };
        check("sixenseGetAllNewestData", status)?;
        Ok(convert::all_samples(&raw))
    }

    fn hemisphere_tracking_mode(&self, which: usize) -> Result<bool> {
        let mut state: c_int = 0;
        // SAFETY: `state` is a valid, writable int.
        let status =
            unsafe { (self.api.get_hemisphere_tracking_mode)(to_index(which), &mut state) };
        check("sixenseGetHemisphereTrackingMode", status)?;
        Ok(state != 0)
    }

    fn set_hemisphere_tracking_mode(&self, which: usize, enabled: bool) -> Result<()> {
        // SAFETY: plain integer arguments.
        check("sixenseSetHemisphereTrackingMode", unsafe {
            (self.api.set_hemisphere_tracking_mode)(to_index(which), c_int::from(enabled))
        })
    }

    fn auto_enable_hemisphere_tracking(&self, which: usize) -> Result<()> {
        // SAFETY: plain integer argument.
        check("sixenseAutoEnableHemisphereTracking", unsafe {
            (self.api.auto_enable_hemisphere_tracking)(to_index(which))
        })
    }

    fn high_priority_binding_enabled(&self) -> Result<bool> {
        let mut on: c_int = 0;
        // SAFETY: `on` is a valid, writable int.
        let status = unsafe { (self.api.get_high_priority_binding_enabled)(&mut on) };
        check("sixenseGetHighPriorityBindingEnabled", status)?;
        Ok(on != 0)
    }

    fn set_high_priority_binding_enabled(&self, enabled: bool) -> Result<()> {
        // SAFETY: plain integer argument.
        check("sixenseSetHighPriorityBindingEnabled", unsafe {
            (self.api.set_high_priority_binding_enabled)(c_int::from(enabled))
        })
    }

    fn trigger_vibration(&self, which: usize, duration: Duration, pattern: u8) -> Result<()> {
        // SAFETY: plain integer arguments.
        check("sixenseTriggerVibration", unsafe {
            (self.api.trigger_vibration)(
                to_index(which),
                sdk::vibration_units(duration),
                c_int::from(pattern),
            )
        })
    }

    fn filter_enabled(&self) -> Result<bool> {
        let mut on: c_int = 0;
        // SAFETY: `on` is a valid, writable int.
        let status = unsafe { (self.api.get_filter_enabled)(&mut on) };
        check("sixenseGetFilterEnabled", status)?;
        Ok(on != 0)
    }

    fn set_filter_enabled(&self, enabled: bool) -> Result<()> {
        // SAFETY: plain integer argument.
        check("sixenseSetFilterEnabled", unsafe {
            (self.api.set_filter_enabled)(c_int::from(enabled))
        })
    }

    fn filter_params(&self) -> Result<FilterParams> {
        let (mut near_range, mut near_val, mut far_range, mut far_val): (f32, f32, f32, f32) =
            (0.0, 0.0, 0.0, 0.0);
        // SAFETY: all four out-pointers are valid, writable floats.
        let status = unsafe {
            (self.api.get_filter_params)(
                &mut near_range,
                &mut near_val,
                &mut far_range,
                &mut far_val,
            )
        };
        check("sixenseGetFilterParams", status)?;
        Ok(FilterParams {
            near_range,
            near_val,
            far_range,
            far_val,
        })
    }

    fn set_filter_params(&self, params: FilterParams) -> Result<()> {
        // SAFETY: plain float arguments.
        check("sixenseSetFilterParams", unsafe {
            (self.api.set_filter_params)(
                params.near_range,
                params.near_val,
                params.far_range,
                params.far_val,
            )
        })
    }

    fn base_color(&self) -> Result<BaseColor> {
        let (mut red, mut green, mut blue): (c_uchar, c_uchar, c_uchar) = (0, 0, 0);
        // SAFETY: all three out-pointers are valid, writable bytes.
        let status = unsafe { (self.api.get_base_color)(&mut red, &mut green, &mut blue) };
        check("sixenseGetBaseColor", status)?;
        Ok(BaseColor { red, green, blue })
    }

    fn set_base_color(&self, color: BaseColor) -> Result<()> {
        // SAFETY: plain byte arguments.
        check("sixenseSetBaseColor", unsafe {
            (self.api.set_base_color)(color.red, color.green, color.blue)
        })
    }
}
