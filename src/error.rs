use std::{collections::BTreeMap, fmt, io, sync::Arc};

/// Structured error: a static key naming the failure, a sorted bag of
/// context arguments, and a chain of underlying causes.
#[derive(Debug, Clone)]
pub struct ViewError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<ViewCause>,
}

#[derive(Debug, Clone)]
pub enum ViewCause {
    View(Box<ViewError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl ViewError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(ViewCause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            ViewCause::View(e) => Some(e.as_ref() as &dyn std::error::Error),
            ViewCause::Std(e) => Some(e.as_ref()),
        })
    }
}

impl From<String> for ViewError {
    fn from(s: String) -> Self {
        ViewError::new("string-error").with_arg("msg", s)
    }
}

impl From<&str> for ViewError {
    fn from(s: &str) -> Self {
        ViewError::new("str-error").with_arg("msg", s)
    }
}

impl From<io::Error> for ViewError {
    fn from(err: io::Error) -> Self {
        ViewError::new("io-error").push_std(err)
    }
}

impl From<image::ImageError> for ViewError {
    fn from(err: image::ImageError) -> Self {
        ViewError::new("image-error").push_std(err)
    }
}

impl From<wgpu::CreateSurfaceError> for ViewError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        ViewError::new("wgpu::CreateSurfaceError").push_std(err)
    }
}

impl From<wgpu::RequestAdapterError> for ViewError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        ViewError::new("wgpu::RequestAdapterError").push_std(err)
    }
}

impl From<wgpu::RequestDeviceError> for ViewError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        ViewError::new("wgpu::RequestDeviceError").push_std(err)
    }
}

impl From<winit::error::EventLoopError> for ViewError {
    fn from(err: winit::error::EventLoopError) -> Self {
        ViewError::new("winit::error::EventLoopError").push_std(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_renders_key_and_sorted_args() {
        let err = ViewError::new("texture-load")
            .with_arg("path", "crate.png")
            .with_arg("format", "rgba8");
        assert_eq!(err.to_string(), "texture-load(format=rgba8, path=crate.png)");
    }

    #[test]
    fn display_without_args_is_bare_key() {
        assert_eq!(ViewError::new("no-adapter").to_string(), "no-adapter()");
    }

    #[test]
    fn source_walks_the_cause_chain() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ViewError = io_err.into();
        assert_eq!(err.key, "io-error");

        let source = err.source().expect("cause chain should be non-empty");
        assert!(source.to_string().contains("missing"));
    }
}
