use crate::errors::CreditResult;
use crate::frame::Frame;

/// Consumer of finalized frames (persistence, training-data queue, ...).
///
/// Frames arrive oldest-first and ownership transfers on each call.
pub trait FrameSink<O> {
    /// Accept one finalized frame.
    fn accept(&mut self, frame: Frame<O>) -> CreditResult<()>;
}

impl<O, S: FrameSink<O> + ?Sized> FrameSink<O> for &mut S {
    fn accept(&mut self, frame: Frame<O>) -> CreditResult<()> {
        (**self).accept(frame)
    }
}

impl<O, S: FrameSink<O> + ?Sized> FrameSink<O> for Box<S> {
    fn accept(&mut self, frame: Frame<O>) -> CreditResult<()> {
        (**self).accept(frame)
    }
}
