//! The function-pointer table.
//!
//! Every entry names the features that provide it, any other names the
//! registry gives the same command, and the signature of the entry point.
//! From that list the macro generates:
//! * `FnTable`, the slots themselves.
//! * One `unsafe fn` per entry on [`GlApi`], named like the GL symbol minus
//!   the `gl` prefix (`gl.Clear(mask)` calls `glClear`).
//! * One `fn` per entry on [`HasLoaded`], to check a slot before calling it.
//! * [`SYMBOLS`], the registry of names in slot order.
//!
//! A provider is written `FEATURE`, `FEATURE + OTHER` when the entry point
//! only comes with the feature if `OTHER` is also there, or `FEATURE @ SCOPE`
//! when it only applies to some contexts (see [`Scope`]).

#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::missing_safety_doc)]

use crate::{
  api::{GlApi, HasLoaded},
  features::{Feature, Features},
  types::*,
  version::ContextProfile,
};

/// The contexts a [`Provider`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
  /// Desktop contexts of either profile.
  Desktop,
  /// GL ES contexts.
  Embedded,
  /// Desktop compatibility profile contexts. The fixed-function pipeline
  /// and the other commands a core profile removes.
  Compatibility,
}
impl Scope {
  #[inline]
  #[must_use]
  pub const fn admits(self, profile: ContextProfile) -> bool {
    match self {
      Scope::Desktop => !matches!(profile, ContextProfile::Embedded),
      Scope::Embedded => matches!(profile, ContextProfile::Embedded),
      Scope::Compatibility => matches!(profile, ContextProfile::Compatibility),
    }
  }
}

/// One feature that provides an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider {
  pub feature: Feature,
  /// A second feature the context must also have.
  pub requires: Option<Feature>,
  /// `None` means every context that has `feature`.
  pub scope: Option<Scope>,
}
impl Provider {
  /// If a context with `features` and `profile` gets the entry point from
  /// this provider.
  #[inline]
  #[must_use]
  pub fn applies(&self, features: &Features, profile: ContextProfile) -> bool {
    features.has(self.feature)
      && self.requires.map_or(true, |f| features.has(f))
      && self.scope.map_or(true, |s| s.admits(profile))
  }
}

/// One entry of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
  /// The full symbol name, such as `glClear`.
  pub name: &'static str,
  /// Other names of the same command, tried in order when `name` doesn't
  /// resolve.
  pub aliases: &'static [&'static str],
  pub providers: &'static [Provider],
}
impl Symbol {
  /// If a context with `features` and `profile` should export this entry
  /// point.
  #[inline]
  #[must_use]
  pub fn is_expected(
    &self, features: &Features, profile: ContextProfile,
  ) -> bool {
    self.providers.iter().any(|p| p.applies(features, profile))
  }
}

#[cold]
#[inline(never)]
#[track_caller]
fn go_panic_because_fn_not_loaded(name: &'static str) -> ! {
  panic!("called `{name}` but it was not loaded")
}

macro_rules! provider_requires {
  () => {
    None
  };
  ($dep:ident) => {
    Some(Feature::$dep)
  };
}

macro_rules! provider_scope {
  () => {
    None
  };
  ($scope:ident) => {
    Some(Scope::$scope)
  };
}

macro_rules! gl_api {
  ($(
    $(#[$meta:meta])*
    [$($feature:ident $(+ $dep:ident)? $(@ $scope:ident)?),+ $(,)?]
    $(aka [$($alias:ident),+ $(,)?])?
    fn $name:ident($($arg:ident: $arg_ty:ty),* $(,)?) $(-> $ret:ty)?;
  )*) => {
    /// Number of entries in the table.
    pub(crate) const SYMBOL_COUNT: usize = [$(stringify!($name)),*].len();

    pub(crate) struct FnTable {
      $($name: Option<unsafe extern "system" fn($($arg_ty),*) $(-> $ret)?>,)*
    }
    impl FnTable {
      pub(crate) const EMPTY: Self = Self { $($name: None,)* };

      /// Fills every slot from `resolve`, which gets the NUL-terminated name
      /// and aliases and gives back either a valid address or null.
      pub(crate) unsafe fn resolve(
        &mut self,
        resolve: &mut dyn FnMut(&'static str, &'static [&'static str]) -> *const c_void,
      ) {
        $(
          self.$name = core::mem::transmute::<
            *const c_void,
            Option<unsafe extern "system" fn($($arg_ty),*) $(-> $ret)?>,
          >(resolve(
            concat!("gl", stringify!($name), "\0"),
            &[$($(concat!("gl", stringify!($alias), "\0")),+)?],
          ));
        )*
      }

      /// Slot states, in [`SYMBOLS`] order.
      pub(crate) fn loaded(&self) -> [bool; SYMBOL_COUNT] {
        [$(self.$name.is_some()),*]
      }
    }

    /// Every entry point of the table, in slot order.
    pub static SYMBOLS: &[Symbol] = &[
      $(
        Symbol {
          name: concat!("gl", stringify!($name)),
          aliases: &[$($(concat!("gl", stringify!($alias))),+)?],
          providers: &[$(
            Provider {
              feature: Feature::$feature,
              requires: provider_requires!($($dep)?),
              scope: provider_scope!($($scope)?),
            }
          ),+],
        },
      )*
    ];

    impl HasLoaded<'_> {
      $(
        #[inline]
        #[must_use]
        pub fn $name(&self) -> bool {
          self.0.fns.$name.is_some()
        }
      )*
    }

    impl GlApi {
      $(
        $(#[$meta])*
        #[inline]
        #[track_caller]
        pub unsafe fn $name(&self, $($arg: $arg_ty),*) $(-> $ret)? {
          match self.fns.$name {
            Some(f) => f($($arg),*),
            None => go_panic_because_fn_not_loaded(
              concat!("gl", stringify!($name))
            ),
          }
        }
      )*
    }
  };
}

gl_api! {
  // GL 1.0

  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn CullFace(mode: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn FrontFace(mode: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn Hint(target: GLenum, mode: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn LineWidth(width: GLfloat);
  [GL_VERSION_1_0] fn PointSize(size: GLfloat);
  [GL_VERSION_1_0] aka [PolygonModeNV] fn PolygonMode(face: GLenum, mode: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn TexParameteri(target: GLenum, pname: GLenum, param: GLint);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
  [GL_VERSION_1_0] fn TexImage1D(
    target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
    border: GLint, format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  /// Khronos: [glTexImage2D](https://registry.khronos.org/OpenGL-Refpages/gl4/html/glTexImage2D.xhtml)
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn TexImage2D(
    target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
    height: GLsizei, border: GLint, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_VERSION_1_0] fn DrawBuffer(buf: GLenum);
  /// Clears one or more buffers.
  ///
  /// Bits can be from the following list:
  /// * `GL_COLOR_BUFFER_BIT`
  /// * `GL_DEPTH_BUFFER_BIT`
  /// * `GL_STENCIL_BUFFER_BIT`
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn Clear(mask: GLbitfield);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn ClearStencil(s: GLint);
  [GL_VERSION_1_0] fn ClearDepth(depth: GLdouble);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn StencilMask(mask: GLuint);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn DepthMask(flag: GLboolean);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn Disable(cap: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn Enable(cap: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn Finish();
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn Flush();
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn BlendFunc(sfactor: GLenum, dfactor: GLenum);
  [GL_VERSION_1_0] fn LogicOp(opcode: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn StencilFunc(func: GLenum, reference: GLint, mask: GLuint);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn DepthFunc(func: GLenum);
  [GL_VERSION_1_0] fn PixelStoref(pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn PixelStorei(pname: GLenum, param: GLint);
  [GL_VERSION_1_0, GL_ES_VERSION_3_0] fn ReadBuffer(src: GLenum);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn ReadPixels(
    x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum,
    ty: GLenum, pixels: *mut c_void,
  );
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
  [GL_VERSION_1_0] fn GetDoublev(pname: GLenum, data: *mut GLdouble);
  /// Pops the oldest error flag, `GL_NO_ERROR` when there is none.
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn GetError() -> GLenum;
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn GetFloatv(pname: GLenum, data: *mut GLfloat);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn GetIntegerv(pname: GLenum, data: *mut GLint);
  /// Khronos: [glGetString](https://registry.khronos.org/OpenGL-Refpages/gl4/html/glGetString.xhtml)
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn GetString(name: GLenum) -> *const GLubyte;
  [GL_VERSION_1_0]
  fn GetTexImage(target: GLenum, level: GLint, format: GLenum, ty: GLenum, pixels: *mut c_void);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_0, GL_ES_VERSION_3_1]
  fn GetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_1_0, GL_ES_VERSION_3_1]
  fn GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0] fn IsEnabled(cap: GLenum) -> GLboolean;
  [GL_VERSION_1_0] fn DepthRange(near: GLdouble, far: GLdouble);
  [GL_VERSION_1_0, GL_ES_VERSION_2_0]
  fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);

  // GL 1.0, compatibility profile

  [GL_VERSION_1_0 @ Compatibility] fn NewList(list: GLuint, mode: GLenum);
  [GL_VERSION_1_0 @ Compatibility] fn EndList();
  [GL_VERSION_1_0 @ Compatibility] fn CallList(list: GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn CallLists(n: GLsizei, ty: GLenum, lists: *const c_void);
  [GL_VERSION_1_0 @ Compatibility] fn DeleteLists(list: GLuint, range: GLsizei);
  [GL_VERSION_1_0 @ Compatibility] fn GenLists(range: GLsizei) -> GLuint;
  [GL_VERSION_1_0 @ Compatibility] fn ListBase(base: GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn Begin(mode: GLenum);
  [GL_VERSION_1_0 @ Compatibility] fn Bitmap(
    width: GLsizei, height: GLsizei, xorig: GLfloat, yorig: GLfloat,
    xmove: GLfloat, ymove: GLfloat, bitmap: *const GLubyte,
  );
  [GL_VERSION_1_0 @ Compatibility] fn Color3b(red: GLbyte, green: GLbyte, blue: GLbyte);
  [GL_VERSION_1_0 @ Compatibility] fn Color3bv(v: *const GLbyte);
  [GL_VERSION_1_0 @ Compatibility] fn Color3d(red: GLdouble, green: GLdouble, blue: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Color3dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Color3f(red: GLfloat, green: GLfloat, blue: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Color3fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Color3i(red: GLint, green: GLint, blue: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Color3iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Color3s(red: GLshort, green: GLshort, blue: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Color3sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Color3ub(red: GLubyte, green: GLubyte, blue: GLubyte);
  [GL_VERSION_1_0 @ Compatibility] fn Color3ubv(v: *const GLubyte);
  [GL_VERSION_1_0 @ Compatibility] fn Color3ui(red: GLuint, green: GLuint, blue: GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn Color3uiv(v: *const GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn Color3us(red: GLushort, green: GLushort, blue: GLushort);
  [GL_VERSION_1_0 @ Compatibility] fn Color3usv(v: *const GLushort);
  [GL_VERSION_1_0 @ Compatibility]
  fn Color4b(red: GLbyte, green: GLbyte, blue: GLbyte, alpha: GLbyte);
  [GL_VERSION_1_0 @ Compatibility] fn Color4bv(v: *const GLbyte);
  [GL_VERSION_1_0 @ Compatibility]
  fn Color4d(red: GLdouble, green: GLdouble, blue: GLdouble, alpha: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Color4dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility]
  fn Color4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Color4fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Color4i(red: GLint, green: GLint, blue: GLint, alpha: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Color4iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility]
  fn Color4s(red: GLshort, green: GLshort, blue: GLshort, alpha: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Color4sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility]
  fn Color4ub(red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte);
  [GL_VERSION_1_0 @ Compatibility] fn Color4ubv(v: *const GLubyte);
  [GL_VERSION_1_0 @ Compatibility]
  fn Color4ui(red: GLuint, green: GLuint, blue: GLuint, alpha: GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn Color4uiv(v: *const GLuint);
  [GL_VERSION_1_0 @ Compatibility]
  fn Color4us(red: GLushort, green: GLushort, blue: GLushort, alpha: GLushort);
  [GL_VERSION_1_0 @ Compatibility] fn Color4usv(v: *const GLushort);
  [GL_VERSION_1_0 @ Compatibility] fn EdgeFlag(flag: GLboolean);
  [GL_VERSION_1_0 @ Compatibility] fn EdgeFlagv(flag: *const GLboolean);
  [GL_VERSION_1_0 @ Compatibility] fn End();
  [GL_VERSION_1_0 @ Compatibility] fn Indexd(c: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Indexdv(c: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Indexf(c: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Indexfv(c: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Indexi(c: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Indexiv(c: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Indexs(c: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Indexsv(c: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3b(nx: GLbyte, ny: GLbyte, nz: GLbyte);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3bv(v: *const GLbyte);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3d(nx: GLdouble, ny: GLdouble, nz: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3f(nx: GLfloat, ny: GLfloat, nz: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3i(nx: GLint, ny: GLint, nz: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3s(nx: GLshort, ny: GLshort, nz: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Normal3sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2d(x: GLdouble, y: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2f(x: GLfloat, y: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2i(x: GLint, y: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2s(x: GLshort, y: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos2sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3d(x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3f(x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3i(x: GLint, y: GLint, z: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3s(x: GLshort, y: GLshort, z: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos3sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility]
  fn RasterPos4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos4dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos4fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos4i(x: GLint, y: GLint, z: GLint, w: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos4iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn RasterPos4sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Rectd(x1: GLdouble, y1: GLdouble, x2: GLdouble, y2: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Rectdv(v1: *const GLdouble, v2: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Rectf(x1: GLfloat, y1: GLfloat, x2: GLfloat, y2: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Rectfv(v1: *const GLfloat, v2: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Recti(x1: GLint, y1: GLint, x2: GLint, y2: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Rectiv(v1: *const GLint, v2: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Rects(x1: GLshort, y1: GLshort, x2: GLshort, y2: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Rectsv(v1: *const GLshort, v2: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1d(s: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1f(s: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1i(s: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1s(s: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord1sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2d(s: GLdouble, t: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2f(s: GLfloat, t: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2i(s: GLint, t: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2s(s: GLshort, t: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord2sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3d(s: GLdouble, t: GLdouble, r: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3f(s: GLfloat, t: GLfloat, r: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3i(s: GLint, t: GLint, r: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3s(s: GLshort, t: GLshort, r: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord3sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility]
  fn TexCoord4d(s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord4dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord4f(s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord4fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord4i(s: GLint, t: GLint, r: GLint, q: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord4iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord4s(s: GLshort, t: GLshort, r: GLshort, q: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn TexCoord4sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2d(x: GLdouble, y: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2f(x: GLfloat, y: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2i(x: GLint, y: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2s(x: GLshort, y: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex2sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3d(x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3f(x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3i(x: GLint, y: GLint, z: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3s(x: GLshort, y: GLshort, z: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex3sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4dv(v: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4fv(v: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4i(x: GLint, y: GLint, z: GLint, w: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4iv(v: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn Vertex4sv(v: *const GLshort);
  [GL_VERSION_1_0 @ Compatibility] fn ClipPlane(plane: GLenum, equation: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn ColorMaterial(face: GLenum, mode: GLenum);
  [GL_VERSION_1_0 @ Compatibility] fn Fogf(pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Fogfv(pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Fogi(pname: GLenum, param: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Fogiv(pname: GLenum, params: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Lightf(light: GLenum, pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Lightfv(light: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Lighti(light: GLenum, pname: GLenum, param: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Lightiv(light: GLenum, pname: GLenum, params: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn LightModelf(pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn LightModelfv(pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn LightModeli(pname: GLenum, param: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn LightModeliv(pname: GLenum, params: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn LineStipple(factor: GLint, pattern: GLushort);
  [GL_VERSION_1_0 @ Compatibility] fn Materialf(face: GLenum, pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0 @ Compatibility]
  fn Materialfv(face: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Materiali(face: GLenum, pname: GLenum, param: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn Materialiv(face: GLenum, pname: GLenum, params: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn PolygonStipple(mask: *const GLubyte);
  [GL_VERSION_1_0 @ Compatibility] fn ShadeModel(mode: GLenum);
  [GL_VERSION_1_0 @ Compatibility] fn TexEnvf(target: GLenum, pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0 @ Compatibility]
  fn TexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexEnvi(target: GLenum, pname: GLenum, param: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexEnviv(target: GLenum, pname: GLenum, params: *const GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexGend(coord: GLenum, pname: GLenum, param: GLdouble);
  [GL_VERSION_1_0 @ Compatibility]
  fn TexGendv(coord: GLenum, pname: GLenum, params: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn TexGenf(coord: GLenum, pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0 @ Compatibility]
  fn TexGenfv(coord: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn TexGeni(coord: GLenum, pname: GLenum, param: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn TexGeniv(coord: GLenum, pname: GLenum, params: *const GLint);
  [GL_VERSION_1_0 @ Compatibility]
  fn FeedbackBuffer(size: GLsizei, ty: GLenum, buffer: *mut GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn SelectBuffer(size: GLsizei, buffer: *mut GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn RenderMode(mode: GLenum) -> GLint;
  [GL_VERSION_1_0 @ Compatibility] fn InitNames();
  [GL_VERSION_1_0 @ Compatibility] fn LoadName(name: GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn PassThrough(token: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn PopName();
  [GL_VERSION_1_0 @ Compatibility] fn PushName(name: GLuint);
  [GL_VERSION_1_0 @ Compatibility]
  fn ClearAccum(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn ClearIndex(c: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn IndexMask(mask: GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn Accum(op: GLenum, value: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn PopAttrib();
  [GL_VERSION_1_0 @ Compatibility] fn PushAttrib(mask: GLbitfield);
  [GL_VERSION_1_0 @ Compatibility] fn Map1d(
    target: GLenum, u1: GLdouble, u2: GLdouble, stride: GLint, order: GLint,
    points: *const GLdouble,
  );
  [GL_VERSION_1_0 @ Compatibility] fn Map1f(
    target: GLenum, u1: GLfloat, u2: GLfloat, stride: GLint, order: GLint,
    points: *const GLfloat,
  );
  [GL_VERSION_1_0 @ Compatibility] fn Map2d(
    target: GLenum, u1: GLdouble, u2: GLdouble, ustride: GLint, uorder: GLint,
    v1: GLdouble, v2: GLdouble, vstride: GLint, vorder: GLint,
    points: *const GLdouble,
  );
  [GL_VERSION_1_0 @ Compatibility] fn Map2f(
    target: GLenum, u1: GLfloat, u2: GLfloat, ustride: GLint, uorder: GLint,
    v1: GLfloat, v2: GLfloat, vstride: GLint, vorder: GLint,
    points: *const GLfloat,
  );
  [GL_VERSION_1_0 @ Compatibility] fn MapGrid1d(un: GLint, u1: GLdouble, u2: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn MapGrid1f(un: GLint, u1: GLfloat, u2: GLfloat);
  [GL_VERSION_1_0 @ Compatibility]
  fn MapGrid2d(un: GLint, u1: GLdouble, u2: GLdouble, vn: GLint, v1: GLdouble, v2: GLdouble);
  [GL_VERSION_1_0 @ Compatibility]
  fn MapGrid2f(un: GLint, u1: GLfloat, u2: GLfloat, vn: GLint, v1: GLfloat, v2: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord1d(u: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord1dv(u: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord1f(u: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord1fv(u: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord2d(u: GLdouble, v: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord2dv(u: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord2f(u: GLfloat, v: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn EvalCoord2fv(u: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn EvalMesh1(mode: GLenum, i1: GLint, i2: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn EvalPoint1(i: GLint);
  [GL_VERSION_1_0 @ Compatibility]
  fn EvalMesh2(mode: GLenum, i1: GLint, i2: GLint, j1: GLint, j2: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn EvalPoint2(i: GLint, j: GLint);
  [GL_VERSION_1_0 @ Compatibility] fn AlphaFunc(func: GLenum, reference: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn PixelZoom(xfactor: GLfloat, yfactor: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn PixelTransferf(pname: GLenum, param: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn PixelTransferi(pname: GLenum, param: GLint);
  [GL_VERSION_1_0 @ Compatibility]
  fn PixelMapfv(map: GLenum, mapsize: GLsizei, values: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility]
  fn PixelMapuiv(map: GLenum, mapsize: GLsizei, values: *const GLuint);
  [GL_VERSION_1_0 @ Compatibility]
  fn PixelMapusv(map: GLenum, mapsize: GLsizei, values: *const GLushort);
  [GL_VERSION_1_0 @ Compatibility]
  fn CopyPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, ty: GLenum);
  [GL_VERSION_1_0 @ Compatibility]
  fn DrawPixels(width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum, pixels: *const c_void);
  [GL_VERSION_1_0 @ Compatibility] fn GetClipPlane(plane: GLenum, equation: *mut GLdouble);
  [GL_VERSION_1_0 @ Compatibility]
  fn GetLightfv(light: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn GetLightiv(light: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_0 @ Compatibility] fn GetMapdv(target: GLenum, query: GLenum, v: *mut GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn GetMapfv(target: GLenum, query: GLenum, v: *mut GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn GetMapiv(target: GLenum, query: GLenum, v: *mut GLint);
  [GL_VERSION_1_0 @ Compatibility]
  fn GetMaterialfv(face: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_1_0 @ Compatibility]
  fn GetMaterialiv(face: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_0 @ Compatibility] fn GetPixelMapfv(map: GLenum, values: *mut GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn GetPixelMapuiv(map: GLenum, values: *mut GLuint);
  [GL_VERSION_1_0 @ Compatibility] fn GetPixelMapusv(map: GLenum, values: *mut GLushort);
  [GL_VERSION_1_0 @ Compatibility] fn GetPolygonStipple(mask: *mut GLubyte);
  [GL_VERSION_1_0 @ Compatibility]
  fn GetTexEnvfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_1_0 @ Compatibility]
  fn GetTexEnviv(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_0 @ Compatibility]
  fn GetTexGendv(coord: GLenum, pname: GLenum, params: *mut GLdouble);
  [GL_VERSION_1_0 @ Compatibility]
  fn GetTexGenfv(coord: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn GetTexGeniv(coord: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_0 @ Compatibility] fn IsList(list: GLuint) -> GLboolean;
  [GL_VERSION_1_0 @ Compatibility] fn Frustum(
    left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble,
    z_near: GLdouble, z_far: GLdouble,
  );
  [GL_VERSION_1_0 @ Compatibility] fn LoadIdentity();
  [GL_VERSION_1_0 @ Compatibility] fn LoadMatrixf(m: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn LoadMatrixd(m: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn MatrixMode(mode: GLenum);
  [GL_VERSION_1_0 @ Compatibility] fn MultMatrixf(m: *const GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn MultMatrixd(m: *const GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Ortho(
    left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble,
    z_near: GLdouble, z_far: GLdouble,
  );
  [GL_VERSION_1_0 @ Compatibility] fn PopMatrix();
  [GL_VERSION_1_0 @ Compatibility] fn PushMatrix();
  [GL_VERSION_1_0 @ Compatibility]
  fn Rotated(angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Rotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Scaled(x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Scalef(x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_VERSION_1_0 @ Compatibility] fn Translated(x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_1_0 @ Compatibility] fn Translatef(x: GLfloat, y: GLfloat, z: GLfloat);

  // GL 1.1

  [GL_VERSION_1_1, GL_ES_VERSION_2_0] aka [DrawArraysEXT]
  fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
  [GL_VERSION_1_1, GL_ES_VERSION_2_0]
  fn DrawElements(mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void);
  [GL_VERSION_1_1, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop] aka [GetPointervEXT, GetPointervKHR]
  fn GetPointerv(pname: GLenum, params: *mut *mut c_void);
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] fn PolygonOffset(factor: GLfloat, units: GLfloat);
  [GL_VERSION_1_1] aka [CopyTexImage1DEXT] fn CopyTexImage1D(
    target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint,
    width: GLsizei, border: GLint,
  );
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] aka [CopyTexImage2DEXT] fn CopyTexImage2D(
    target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint,
    width: GLsizei, height: GLsizei, border: GLint,
  );
  [GL_VERSION_1_1] aka [CopyTexSubImage1DEXT] fn CopyTexSubImage1D(
    target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint,
    width: GLsizei,
  );
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] aka [CopyTexSubImage2DEXT]
  fn CopyTexSubImage2D(
    target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint,
    y: GLint, width: GLsizei, height: GLsizei,
  );
  [GL_VERSION_1_1] aka [TexSubImage1DEXT] fn TexSubImage1D(
    target: GLenum, level: GLint, xoffset: GLint, width: GLsizei,
    format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] aka [TexSubImage2DEXT] fn TexSubImage2D(
    target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
    width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] aka [BindTextureEXT]
  fn BindTexture(target: GLenum, texture: GLuint);
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] fn DeleteTextures(n: GLsizei, textures: *const GLuint);
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] fn GenTextures(n: GLsizei, textures: *mut GLuint);
  [GL_VERSION_1_1, GL_ES_VERSION_2_0] fn IsTexture(texture: GLuint) -> GLboolean;

  // GL 1.1, compatibility profile

  [GL_VERSION_1_1 @ Compatibility] aka [ArrayElementEXT] fn ArrayElement(i: GLint);
  [GL_VERSION_1_1 @ Compatibility]
  fn ColorPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_1 @ Compatibility] fn DisableClientState(array: GLenum);
  [GL_VERSION_1_1 @ Compatibility] fn EdgeFlagPointer(stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_1 @ Compatibility] fn EnableClientState(array: GLenum);
  [GL_VERSION_1_1 @ Compatibility]
  fn IndexPointer(ty: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_1 @ Compatibility]
  fn InterleavedArrays(format: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_1 @ Compatibility]
  fn NormalPointer(ty: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_1 @ Compatibility]
  fn TexCoordPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_1 @ Compatibility]
  fn VertexPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_1 @ Compatibility] fn AreTexturesResident(
    n: GLsizei, textures: *const GLuint, residences: *mut GLboolean,
  ) -> GLboolean;
  [GL_VERSION_1_1 @ Compatibility] aka [PrioritizeTexturesEXT]
  fn PrioritizeTextures(n: GLsizei, textures: *const GLuint, priorities: *const GLfloat);
  [GL_VERSION_1_1 @ Compatibility] fn Indexub(c: GLubyte);
  [GL_VERSION_1_1 @ Compatibility] fn Indexubv(c: *const GLubyte);
  [GL_VERSION_1_1 @ Compatibility] fn PopClientAttrib();
  [GL_VERSION_1_1 @ Compatibility] fn PushClientAttrib(mask: GLbitfield);

  // GL 1.2

  [GL_VERSION_1_2, GL_ES_VERSION_3_0] aka [DrawRangeElementsEXT]
  fn DrawRangeElements(
    mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, ty: GLenum,
    indices: *const c_void,
  );
  [GL_VERSION_1_2, GL_ES_VERSION_3_0] aka [TexImage3DEXT] fn TexImage3D(
    target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
    height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_VERSION_1_2, GL_ES_VERSION_3_0] aka [TexSubImage3DEXT] fn TexSubImage3D(
    target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_VERSION_1_2, GL_ES_VERSION_3_0] aka [CopyTexSubImage3DEXT]
  fn CopyTexSubImage3D(
    target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei,
  );

  // GL 1.3

  [GL_VERSION_1_3, GL_ES_VERSION_2_0] aka [ActiveTextureARB] fn ActiveTexture(texture: GLenum);
  [GL_VERSION_1_3, GL_ES_VERSION_2_0] aka [SampleCoverageARB]
  fn SampleCoverage(value: GLfloat, invert: GLboolean);
  [GL_VERSION_1_3, GL_ES_VERSION_3_0] aka [CompressedTexImage3DARB]
  fn CompressedTexImage3D(
    target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei,
    height: GLsizei, depth: GLsizei, border: GLint, image_size: GLsizei,
    data: *const c_void,
  );
  [GL_VERSION_1_3, GL_ES_VERSION_2_0] aka [CompressedTexImage2DARB]
  fn CompressedTexImage2D(
    target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei,
    height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void,
  );
  [GL_VERSION_1_3] aka [CompressedTexImage1DARB] fn CompressedTexImage1D(
    target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei,
    border: GLint, image_size: GLsizei, data: *const c_void,
  );
  [GL_VERSION_1_3, GL_ES_VERSION_3_0] aka [CompressedTexSubImage3DARB]
  fn CompressedTexSubImage3D(
    target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_VERSION_1_3, GL_ES_VERSION_2_0] aka [CompressedTexSubImage2DARB]
  fn CompressedTexSubImage2D(
    target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
    width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei,
    data: *const c_void,
  );
  [GL_VERSION_1_3] aka [CompressedTexSubImage1DARB] fn CompressedTexSubImage1D(
    target: GLenum, level: GLint, xoffset: GLint, width: GLsizei,
    format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_VERSION_1_3] aka [GetCompressedTexImageARB]
  fn GetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void);

  // GL 1.3, compatibility profile

  [GL_VERSION_1_3 @ Compatibility] aka [ClientActiveTextureARB]
  fn ClientActiveTexture(texture: GLenum);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1dARB]
  fn MultiTexCoord1d(target: GLenum, s: GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1dvARB]
  fn MultiTexCoord1dv(target: GLenum, v: *const GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1fARB]
  fn MultiTexCoord1f(target: GLenum, s: GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1fvARB]
  fn MultiTexCoord1fv(target: GLenum, v: *const GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1iARB]
  fn MultiTexCoord1i(target: GLenum, s: GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1ivARB]
  fn MultiTexCoord1iv(target: GLenum, v: *const GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1sARB]
  fn MultiTexCoord1s(target: GLenum, s: GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord1svARB]
  fn MultiTexCoord1sv(target: GLenum, v: *const GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2dARB]
  fn MultiTexCoord2d(target: GLenum, s: GLdouble, t: GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2dvARB]
  fn MultiTexCoord2dv(target: GLenum, v: *const GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2fARB]
  fn MultiTexCoord2f(target: GLenum, s: GLfloat, t: GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2fvARB]
  fn MultiTexCoord2fv(target: GLenum, v: *const GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2iARB]
  fn MultiTexCoord2i(target: GLenum, s: GLint, t: GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2ivARB]
  fn MultiTexCoord2iv(target: GLenum, v: *const GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2sARB]
  fn MultiTexCoord2s(target: GLenum, s: GLshort, t: GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord2svARB]
  fn MultiTexCoord2sv(target: GLenum, v: *const GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3dARB]
  fn MultiTexCoord3d(target: GLenum, s: GLdouble, t: GLdouble, r: GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3dvARB]
  fn MultiTexCoord3dv(target: GLenum, v: *const GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3fARB]
  fn MultiTexCoord3f(target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3fvARB]
  fn MultiTexCoord3fv(target: GLenum, v: *const GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3iARB]
  fn MultiTexCoord3i(target: GLenum, s: GLint, t: GLint, r: GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3ivARB]
  fn MultiTexCoord3iv(target: GLenum, v: *const GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3sARB]
  fn MultiTexCoord3s(target: GLenum, s: GLshort, t: GLshort, r: GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord3svARB]
  fn MultiTexCoord3sv(target: GLenum, v: *const GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4dARB]
  fn MultiTexCoord4d(target: GLenum, s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4dvARB]
  fn MultiTexCoord4dv(target: GLenum, v: *const GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4fARB]
  fn MultiTexCoord4f(target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4fvARB]
  fn MultiTexCoord4fv(target: GLenum, v: *const GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4iARB]
  fn MultiTexCoord4i(target: GLenum, s: GLint, t: GLint, r: GLint, q: GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4ivARB]
  fn MultiTexCoord4iv(target: GLenum, v: *const GLint);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4sARB]
  fn MultiTexCoord4s(target: GLenum, s: GLshort, t: GLshort, r: GLshort, q: GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [MultiTexCoord4svARB]
  fn MultiTexCoord4sv(target: GLenum, v: *const GLshort);
  [GL_VERSION_1_3 @ Compatibility] aka [LoadTransposeMatrixfARB]
  fn LoadTransposeMatrixf(m: *const GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [LoadTransposeMatrixdARB]
  fn LoadTransposeMatrixd(m: *const GLdouble);
  [GL_VERSION_1_3 @ Compatibility] aka [MultTransposeMatrixfARB]
  fn MultTransposeMatrixf(m: *const GLfloat);
  [GL_VERSION_1_3 @ Compatibility] aka [MultTransposeMatrixdARB]
  fn MultTransposeMatrixd(m: *const GLdouble);

  // GL 1.4

  [GL_VERSION_1_4, GL_ES_VERSION_2_0] aka [BlendFuncSeparateEXT, BlendFuncSeparateINGR]
  fn BlendFuncSeparate(
    sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum,
    dfactor_alpha: GLenum,
  );
  [GL_VERSION_1_4] aka [MultiDrawArraysEXT]
  fn MultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei);
  [GL_VERSION_1_4] aka [MultiDrawElementsEXT] fn MultiDrawElements(
    mode: GLenum, count: *const GLsizei, ty: GLenum,
    indices: *const *const c_void, drawcount: GLsizei,
  );
  [GL_VERSION_1_4] aka [PointParameterfARB, PointParameterfEXT, PointParameterfSGIS]
  fn PointParameterf(pname: GLenum, param: GLfloat);
  [GL_VERSION_1_4] aka [PointParameterfvARB, PointParameterfvEXT, PointParameterfvSGIS]
  fn PointParameterfv(pname: GLenum, params: *const GLfloat);
  [GL_VERSION_1_4] aka [PointParameteriNV] fn PointParameteri(pname: GLenum, param: GLint);
  [GL_VERSION_1_4] aka [PointParameterivNV]
  fn PointParameteriv(pname: GLenum, params: *const GLint);
  [GL_VERSION_1_4, GL_ES_VERSION_2_0] aka [BlendColorEXT]
  fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
  [GL_VERSION_1_4, GL_ES_VERSION_2_0] aka [BlendEquationEXT] fn BlendEquation(mode: GLenum);

  // GL 1.4, compatibility profile

  [GL_VERSION_1_4 @ Compatibility] aka [FogCoordfEXT] fn FogCoordf(coord: GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [FogCoordfvEXT] fn FogCoordfv(coord: *const GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [FogCoorddEXT] fn FogCoordd(coord: GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [FogCoorddvEXT] fn FogCoorddv(coord: *const GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [FogCoordPointerEXT]
  fn FogCoordPointer(ty: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3bEXT]
  fn SecondaryColor3b(red: GLbyte, green: GLbyte, blue: GLbyte);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3bvEXT]
  fn SecondaryColor3bv(v: *const GLbyte);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3dEXT]
  fn SecondaryColor3d(red: GLdouble, green: GLdouble, blue: GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3dvEXT]
  fn SecondaryColor3dv(v: *const GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3fEXT]
  fn SecondaryColor3f(red: GLfloat, green: GLfloat, blue: GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3fvEXT]
  fn SecondaryColor3fv(v: *const GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3iEXT]
  fn SecondaryColor3i(red: GLint, green: GLint, blue: GLint);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3ivEXT] fn SecondaryColor3iv(v: *const GLint);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3sEXT]
  fn SecondaryColor3s(red: GLshort, green: GLshort, blue: GLshort);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3svEXT]
  fn SecondaryColor3sv(v: *const GLshort);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3ubEXT]
  fn SecondaryColor3ub(red: GLubyte, green: GLubyte, blue: GLubyte);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3ubvEXT]
  fn SecondaryColor3ubv(v: *const GLubyte);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3uiEXT]
  fn SecondaryColor3ui(red: GLuint, green: GLuint, blue: GLuint);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3uivEXT]
  fn SecondaryColor3uiv(v: *const GLuint);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3usEXT]
  fn SecondaryColor3us(red: GLushort, green: GLushort, blue: GLushort);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColor3usvEXT]
  fn SecondaryColor3usv(v: *const GLushort);
  [GL_VERSION_1_4 @ Compatibility] aka [SecondaryColorPointerEXT]
  fn SecondaryColorPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const c_void);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2dARB, WindowPos2dMESA]
  fn WindowPos2d(x: GLdouble, y: GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2dvARB, WindowPos2dvMESA]
  fn WindowPos2dv(v: *const GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2fARB, WindowPos2fMESA]
  fn WindowPos2f(x: GLfloat, y: GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2fvARB, WindowPos2fvMESA]
  fn WindowPos2fv(v: *const GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2iARB, WindowPos2iMESA]
  fn WindowPos2i(x: GLint, y: GLint);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2ivARB, WindowPos2ivMESA]
  fn WindowPos2iv(v: *const GLint);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2sARB, WindowPos2sMESA]
  fn WindowPos2s(x: GLshort, y: GLshort);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos2svARB, WindowPos2svMESA]
  fn WindowPos2sv(v: *const GLshort);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3dARB, WindowPos3dMESA]
  fn WindowPos3d(x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3dvARB, WindowPos3dvMESA]
  fn WindowPos3dv(v: *const GLdouble);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3fARB, WindowPos3fMESA]
  fn WindowPos3f(x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3fvARB, WindowPos3fvMESA]
  fn WindowPos3fv(v: *const GLfloat);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3iARB, WindowPos3iMESA]
  fn WindowPos3i(x: GLint, y: GLint, z: GLint);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3ivARB, WindowPos3ivMESA]
  fn WindowPos3iv(v: *const GLint);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3sARB, WindowPos3sMESA]
  fn WindowPos3s(x: GLshort, y: GLshort, z: GLshort);
  [GL_VERSION_1_4 @ Compatibility] aka [WindowPos3svARB, WindowPos3svMESA]
  fn WindowPos3sv(v: *const GLshort);

  // GL 1.5

  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [GenQueriesARB]
  fn GenQueries(n: GLsizei, ids: *mut GLuint);
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [DeleteQueriesARB]
  fn DeleteQueries(n: GLsizei, ids: *const GLuint);
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [IsQueryARB] fn IsQuery(id: GLuint) -> GLboolean;
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [BeginQueryARB] fn BeginQuery(target: GLenum, id: GLuint);
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [EndQueryARB] fn EndQuery(target: GLenum);
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [GetQueryivARB]
  fn GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_5] aka [GetQueryObjectivARB, GetQueryObjectivEXT]
  fn GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [GetQueryObjectuivARB]
  fn GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
  [GL_VERSION_1_5, GL_ES_VERSION_2_0] aka [BindBufferARB]
  fn BindBuffer(target: GLenum, buffer: GLuint);
  [GL_VERSION_1_5, GL_ES_VERSION_2_0] aka [DeleteBuffersARB]
  fn DeleteBuffers(n: GLsizei, buffers: *const GLuint);
  [GL_VERSION_1_5, GL_ES_VERSION_2_0] aka [GenBuffersARB]
  fn GenBuffers(n: GLsizei, buffers: *mut GLuint);
  [GL_VERSION_1_5, GL_ES_VERSION_2_0] aka [IsBufferARB] fn IsBuffer(buffer: GLuint) -> GLboolean;
  /// Allocate new storage for the buffer bound to `target` and copy this data
  /// into it.
  ///
  /// Khronos: [glBufferData](https://registry.khronos.org/OpenGL-Refpages/gl4/html/glBufferData.xhtml)
  [GL_VERSION_1_5, GL_ES_VERSION_2_0] aka [BufferDataARB]
  fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
  [GL_VERSION_1_5, GL_ES_VERSION_2_0] aka [BufferSubDataARB]
  fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
  [GL_VERSION_1_5] aka [GetBufferSubDataARB]
  fn GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
  [GL_VERSION_1_5] aka [MapBufferARB, MapBufferOES]
  fn MapBuffer(target: GLenum, access: GLenum) -> *mut c_void;
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [UnmapBufferARB, UnmapBufferOES]
  fn UnmapBuffer(target: GLenum) -> GLboolean;
  [GL_VERSION_1_5, GL_ES_VERSION_2_0] aka [GetBufferParameterivARB]
  fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_1_5, GL_ES_VERSION_3_0] aka [GetBufferPointervARB, GetBufferPointervOES]
  fn GetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void);

  // GL 2.0

  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [BlendEquationSeparateEXT]
  fn BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
  [GL_VERSION_2_0, GL_ES_VERSION_3_0] aka [DrawBuffersARB, DrawBuffersATI, DrawBuffersEXT]
  fn DrawBuffers(n: GLsizei, bufs: *const GLenum);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [StencilOpSeparateATI]
  fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0]
  fn StencilFuncSeparate(face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn StencilMaskSeparate(face: GLenum, mask: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn AttachShader(program: GLuint, shader: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [BindAttribLocationARB]
  fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [CompileShaderARB] fn CompileShader(shader: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn CreateProgram() -> GLuint;
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn CreateShader(ty: GLenum) -> GLuint;
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn DeleteProgram(program: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn DeleteShader(shader: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn DetachShader(program: GLuint, shader: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [DisableVertexAttribArrayARB]
  fn DisableVertexAttribArray(index: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [EnableVertexAttribArrayARB]
  fn EnableVertexAttribArray(index: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetActiveAttribARB]
  fn GetActiveAttrib(
    program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    size: *mut GLint, ty: *mut GLenum, name: *mut GLchar,
  );
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetActiveUniformARB]
  fn GetActiveUniform(
    program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    size: *mut GLint, ty: *mut GLenum, name: *mut GLchar,
  );
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn GetAttachedShaders(
    program: GLuint, max_count: GLsizei, count: *mut GLsizei,
    shaders: *mut GLuint,
  );
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetAttribLocationARB]
  fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
  [GL_VERSION_2_0, GL_ES_VERSION_2_0]
  fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn GetProgramInfoLog(
    program: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    info_log: *mut GLchar,
  );
  [GL_VERSION_2_0, GL_ES_VERSION_2_0]
  fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn GetShaderInfoLog(
    shader: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    info_log: *mut GLchar,
  );
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetShaderSourceARB]
  fn GetShaderSource(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetUniformLocationARB]
  fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetUniformfvARB]
  fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetUniformivARB]
  fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
  [GL_VERSION_2_0] aka [GetVertexAttribdvARB, GetVertexAttribdvNV]
  fn GetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetVertexAttribfvARB, GetVertexAttribfvNV]
  fn GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetVertexAttribivARB, GetVertexAttribivNV]
  fn GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [GetVertexAttribPointervARB, GetVertexAttribPointervNV]
  fn GetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn IsProgram(program: GLuint) -> GLboolean;
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn IsShader(shader: GLuint) -> GLboolean;
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [LinkProgramARB] fn LinkProgram(program: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [ShaderSourceARB] fn ShaderSource(
    shader: GLuint, count: GLsizei, string: *const *const GLchar,
    length: *const GLint,
  );
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] fn UseProgram(program: GLuint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform1fARB] fn Uniform1f(location: GLint, v0: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform2fARB]
  fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform3fARB]
  fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform4fARB]
  fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform1iARB] fn Uniform1i(location: GLint, v0: GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform2iARB]
  fn Uniform2i(location: GLint, v0: GLint, v1: GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform3iARB]
  fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform4iARB]
  fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform1fvARB]
  fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform2fvARB]
  fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform3fvARB]
  fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform4fvARB]
  fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform1ivARB]
  fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform2ivARB]
  fn Uniform2iv(location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform3ivARB]
  fn Uniform3iv(location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [Uniform4ivARB]
  fn Uniform4iv(location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [UniformMatrix2fvARB]
  fn UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [UniformMatrix3fvARB]
  fn UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [UniformMatrix4fvARB]
  fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [ValidateProgramARB] fn ValidateProgram(program: GLuint);
  [GL_VERSION_2_0] aka [VertexAttrib1dARB, VertexAttrib1dNV]
  fn VertexAttrib1d(index: GLuint, x: GLdouble);
  [GL_VERSION_2_0] aka [VertexAttrib1dvARB, VertexAttrib1dvNV]
  fn VertexAttrib1dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib1fARB, VertexAttrib1fNV]
  fn VertexAttrib1f(index: GLuint, x: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib1fvARB, VertexAttrib1fvNV]
  fn VertexAttrib1fv(index: GLuint, v: *const GLfloat);
  [GL_VERSION_2_0] aka [VertexAttrib1sARB, VertexAttrib1sNV]
  fn VertexAttrib1s(index: GLuint, x: GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib1svARB, VertexAttrib1svNV]
  fn VertexAttrib1sv(index: GLuint, v: *const GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib2dARB, VertexAttrib2dNV]
  fn VertexAttrib2d(index: GLuint, x: GLdouble, y: GLdouble);
  [GL_VERSION_2_0] aka [VertexAttrib2dvARB, VertexAttrib2dvNV]
  fn VertexAttrib2dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib2fARB, VertexAttrib2fNV]
  fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib2fvARB, VertexAttrib2fvNV]
  fn VertexAttrib2fv(index: GLuint, v: *const GLfloat);
  [GL_VERSION_2_0] aka [VertexAttrib2sARB, VertexAttrib2sNV]
  fn VertexAttrib2s(index: GLuint, x: GLshort, y: GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib2svARB, VertexAttrib2svNV]
  fn VertexAttrib2sv(index: GLuint, v: *const GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib3dARB, VertexAttrib3dNV]
  fn VertexAttrib3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_2_0] aka [VertexAttrib3dvARB, VertexAttrib3dvNV]
  fn VertexAttrib3dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib3fARB, VertexAttrib3fNV]
  fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib3fvARB, VertexAttrib3fvNV]
  fn VertexAttrib3fv(index: GLuint, v: *const GLfloat);
  [GL_VERSION_2_0] aka [VertexAttrib3sARB, VertexAttrib3sNV]
  fn VertexAttrib3s(index: GLuint, x: GLshort, y: GLshort, z: GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib3svARB, VertexAttrib3svNV]
  fn VertexAttrib3sv(index: GLuint, v: *const GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib4NbvARB] fn VertexAttrib4Nbv(index: GLuint, v: *const GLbyte);
  [GL_VERSION_2_0] aka [VertexAttrib4NivARB] fn VertexAttrib4Niv(index: GLuint, v: *const GLint);
  [GL_VERSION_2_0] aka [VertexAttrib4NsvARB] fn VertexAttrib4Nsv(index: GLuint, v: *const GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib4NubARB, VertexAttrib4ubNV]
  fn VertexAttrib4Nub(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte);
  [GL_VERSION_2_0] aka [VertexAttrib4NubvARB, VertexAttrib4ubvNV]
  fn VertexAttrib4Nubv(index: GLuint, v: *const GLubyte);
  [GL_VERSION_2_0] aka [VertexAttrib4NuivARB] fn VertexAttrib4Nuiv(index: GLuint, v: *const GLuint);
  [GL_VERSION_2_0] aka [VertexAttrib4NusvARB]
  fn VertexAttrib4Nusv(index: GLuint, v: *const GLushort);
  [GL_VERSION_2_0] aka [VertexAttrib4bvARB] fn VertexAttrib4bv(index: GLuint, v: *const GLbyte);
  [GL_VERSION_2_0] aka [VertexAttrib4dARB, VertexAttrib4dNV]
  fn VertexAttrib4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
  [GL_VERSION_2_0] aka [VertexAttrib4dvARB, VertexAttrib4dvNV]
  fn VertexAttrib4dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib4fARB, VertexAttrib4fNV]
  fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttrib4fvARB, VertexAttrib4fvNV]
  fn VertexAttrib4fv(index: GLuint, v: *const GLfloat);
  [GL_VERSION_2_0] aka [VertexAttrib4ivARB] fn VertexAttrib4iv(index: GLuint, v: *const GLint);
  [GL_VERSION_2_0] aka [VertexAttrib4sARB, VertexAttrib4sNV]
  fn VertexAttrib4s(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib4svARB, VertexAttrib4svNV]
  fn VertexAttrib4sv(index: GLuint, v: *const GLshort);
  [GL_VERSION_2_0] aka [VertexAttrib4ubvARB] fn VertexAttrib4ubv(index: GLuint, v: *const GLubyte);
  [GL_VERSION_2_0] aka [VertexAttrib4uivARB] fn VertexAttrib4uiv(index: GLuint, v: *const GLuint);
  [GL_VERSION_2_0] aka [VertexAttrib4usvARB] fn VertexAttrib4usv(index: GLuint, v: *const GLushort);
  [GL_VERSION_2_0, GL_ES_VERSION_2_0] aka [VertexAttribPointerARB]
  fn VertexAttribPointer(
    index: GLuint, size: GLint, ty: GLenum, normalized: GLboolean,
    stride: GLsizei, pointer: *const c_void,
  );

  // GL 2.1

  [GL_VERSION_2_1, GL_ES_VERSION_3_0] aka [UniformMatrix2x3fvNV]
  fn UniformMatrix2x3fv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_2_1, GL_ES_VERSION_3_0] aka [UniformMatrix3x2fvNV]
  fn UniformMatrix3x2fv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_2_1, GL_ES_VERSION_3_0] aka [UniformMatrix2x4fvNV]
  fn UniformMatrix2x4fv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_2_1, GL_ES_VERSION_3_0] aka [UniformMatrix4x2fvNV]
  fn UniformMatrix4x2fv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_2_1, GL_ES_VERSION_3_0] aka [UniformMatrix3x4fvNV]
  fn UniformMatrix3x4fv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_2_1, GL_ES_VERSION_3_0] aka [UniformMatrix4x3fvNV]
  fn UniformMatrix4x3fv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );

  // GL 3.0

  [GL_VERSION_3_0, GL_ES_VERSION_3_2] aka [ColorMaskIndexedEXT, ColorMaskiEXT, ColorMaskiOES]
  fn ColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
  [GL_VERSION_3_0, GL_ES_VERSION_3_1] aka [GetBooleanIndexedvEXT]
  fn GetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object] aka [GetIntegerIndexedvEXT]
  fn GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_2] aka [EnableIndexedEXT, EnableiEXT, EnableiNV, EnableiOES]
  fn Enablei(target: GLenum, index: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_2] aka [DisableIndexedEXT, DisableiEXT, DisableiNV, DisableiOES]
  fn Disablei(target: GLenum, index: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_2]
  aka [IsEnabledIndexedEXT, IsEnablediEXT, IsEnablediNV, IsEnablediOES]
  fn IsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [BeginTransformFeedbackEXT, BeginTransformFeedbackNV]
  fn BeginTransformFeedback(primitive_mode: GLenum);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [EndTransformFeedbackEXT, EndTransformFeedbackNV]
  fn EndTransformFeedback();
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  aka [BindBufferRangeEXT, BindBufferRangeNV] fn BindBufferRange(
    target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr,
    size: GLsizeiptr,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  aka [BindBufferBaseEXT, BindBufferBaseNV]
  fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [TransformFeedbackVaryingsEXT]
  fn TransformFeedbackVaryings(
    program: GLuint, count: GLsizei, varyings: *const *const GLchar,
    buffer_mode: GLenum,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [GetTransformFeedbackVaryingEXT]
  fn GetTransformFeedbackVarying(
    program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    size: *mut GLsizei, ty: *mut GLenum, name: *mut GLchar,
  );
  [GL_VERSION_3_0] aka [ClampColorARB] fn ClampColor(target: GLenum, clamp: GLenum);
  [GL_VERSION_3_0] aka [BeginConditionalRenderNV]
  fn BeginConditionalRender(id: GLuint, mode: GLenum);
  [GL_VERSION_3_0] aka [EndConditionalRenderNV, EndConditionalRenderNVX] fn EndConditionalRender();
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [VertexAttribIPointerEXT]
  fn VertexAttribIPointer(
    index: GLuint, size: GLint, ty: GLenum, stride: GLsizei,
    pointer: *const c_void,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [GetVertexAttribIivEXT]
  fn GetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [GetVertexAttribIuivEXT]
  fn GetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint);
  [GL_VERSION_3_0] aka [VertexAttribI1iEXT] fn VertexAttribI1i(index: GLuint, x: GLint);
  [GL_VERSION_3_0] aka [VertexAttribI2iEXT] fn VertexAttribI2i(index: GLuint, x: GLint, y: GLint);
  [GL_VERSION_3_0] aka [VertexAttribI3iEXT]
  fn VertexAttribI3i(index: GLuint, x: GLint, y: GLint, z: GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [VertexAttribI4iEXT]
  fn VertexAttribI4i(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
  [GL_VERSION_3_0] aka [VertexAttribI1uiEXT] fn VertexAttribI1ui(index: GLuint, x: GLuint);
  [GL_VERSION_3_0] aka [VertexAttribI2uiEXT]
  fn VertexAttribI2ui(index: GLuint, x: GLuint, y: GLuint);
  [GL_VERSION_3_0] aka [VertexAttribI3uiEXT]
  fn VertexAttribI3ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [VertexAttribI4uiEXT]
  fn VertexAttribI4ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
  [GL_VERSION_3_0] aka [VertexAttribI1ivEXT] fn VertexAttribI1iv(index: GLuint, v: *const GLint);
  [GL_VERSION_3_0] aka [VertexAttribI2ivEXT] fn VertexAttribI2iv(index: GLuint, v: *const GLint);
  [GL_VERSION_3_0] aka [VertexAttribI3ivEXT] fn VertexAttribI3iv(index: GLuint, v: *const GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [VertexAttribI4ivEXT]
  fn VertexAttribI4iv(index: GLuint, v: *const GLint);
  [GL_VERSION_3_0] aka [VertexAttribI1uivEXT] fn VertexAttribI1uiv(index: GLuint, v: *const GLuint);
  [GL_VERSION_3_0] aka [VertexAttribI2uivEXT] fn VertexAttribI2uiv(index: GLuint, v: *const GLuint);
  [GL_VERSION_3_0] aka [VertexAttribI3uivEXT] fn VertexAttribI3uiv(index: GLuint, v: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [VertexAttribI4uivEXT]
  fn VertexAttribI4uiv(index: GLuint, v: *const GLuint);
  [GL_VERSION_3_0] aka [VertexAttribI4bvEXT] fn VertexAttribI4bv(index: GLuint, v: *const GLbyte);
  [GL_VERSION_3_0] aka [VertexAttribI4svEXT] fn VertexAttribI4sv(index: GLuint, v: *const GLshort);
  [GL_VERSION_3_0] aka [VertexAttribI4ubvEXT]
  fn VertexAttribI4ubv(index: GLuint, v: *const GLubyte);
  [GL_VERSION_3_0] aka [VertexAttribI4usvEXT]
  fn VertexAttribI4usv(index: GLuint, v: *const GLushort);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [GetUniformuivEXT]
  fn GetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint);
  [GL_VERSION_3_0] aka [BindFragDataLocationEXT]
  fn BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [GetFragDataLocationEXT]
  fn GetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint;
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform1uiEXT]
  fn Uniform1ui(location: GLint, v0: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform2uiEXT]
  fn Uniform2ui(location: GLint, v0: GLuint, v1: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform3uiEXT]
  fn Uniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform4uiEXT]
  fn Uniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform1uivEXT]
  fn Uniform1uiv(location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform2uivEXT]
  fn Uniform2uiv(location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform3uivEXT]
  fn Uniform3uiv(location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [Uniform4uivEXT]
  fn Uniform4uiv(location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_2] aka [TexParameterIivEXT, TexParameterIivOES]
  fn TexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_2] aka [TexParameterIuivEXT, TexParameterIuivOES]
  fn TexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_2] aka [GetTexParameterIivEXT, GetTexParameterIivOES]
  fn GetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_2] aka [GetTexParameterIuivEXT, GetTexParameterIuivOES]
  fn GetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0]
  fn ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0]
  fn ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0]
  fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0]
  fn ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
  /// Reads one entry of an indexed string list, such as `GL_EXTENSIONS`.
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [IsRenderbufferEXT]
  fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object]
  fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [DeleteRenderbuffersEXT]
  fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [GenRenderbuffersEXT]
  fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [RenderbufferStorageEXT]
  fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [GetRenderbufferParameterivEXT]
  fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [IsFramebufferEXT]
  fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object]
  fn BindFramebuffer(target: GLenum, framebuffer: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [DeleteFramebuffersEXT]
  fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [GenFramebuffersEXT]
  fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [CheckFramebufferStatusEXT]
  fn CheckFramebufferStatus(target: GLenum) -> GLenum;
  [GL_VERSION_3_0, GL_ARB_framebuffer_object] aka [FramebufferTexture1DEXT]
  fn FramebufferTexture1D(
    target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [FramebufferTexture2DEXT]
  fn FramebufferTexture2D(
    target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint,
  );
  [GL_VERSION_3_0, GL_ARB_framebuffer_object] aka [FramebufferTexture3DEXT]
  fn FramebufferTexture3D(
    target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint, zoffset: GLint,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [FramebufferRenderbufferEXT]
  fn FramebufferRenderbuffer(
    target: GLenum, attachment: GLenum, renderbuffertarget: GLenum,
    renderbuffer: GLuint,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object]
  aka [GetFramebufferAttachmentParameterivEXT]
  fn GetFramebufferAttachmentParameteriv(
    target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_2_0, GL_ARB_framebuffer_object] aka [GenerateMipmapEXT]
  fn GenerateMipmap(target: GLenum);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_framebuffer_object]
  aka [BlitFramebufferEXT, BlitFramebufferNV] fn BlitFramebuffer(
    src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint,
    dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield,
    filter: GLenum,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_framebuffer_object]
  aka [RenderbufferStorageMultisampleEXT, RenderbufferStorageMultisampleNV]
  fn RenderbufferStorageMultisample(
    target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_framebuffer_object]
  aka [FramebufferTextureLayerARB, FramebufferTextureLayerEXT]
  fn FramebufferTextureLayer(
    target: GLenum, attachment: GLenum, texture: GLuint, level: GLint,
    layer: GLint,
  );
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [MapBufferRangeEXT] fn MapBufferRange(
    target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield,
  ) -> *mut c_void;
  [GL_VERSION_3_0, GL_ES_VERSION_3_0] aka [FlushMappedBufferRangeAPPLE, FlushMappedBufferRangeEXT]
  fn FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_vertex_array_object] aka [BindVertexArrayOES]
  fn BindVertexArray(array: GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_vertex_array_object]
  aka [DeleteVertexArraysAPPLE, DeleteVertexArraysOES]
  fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_vertex_array_object]
  aka [GenVertexArraysAPPLE, GenVertexArraysOES]
  fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint);
  [GL_VERSION_3_0, GL_ES_VERSION_3_0, GL_ARB_vertex_array_object]
  aka [IsVertexArrayAPPLE, IsVertexArrayOES]
  fn IsVertexArray(array: GLuint) -> GLboolean;

  // GL 3.1

  [GL_VERSION_3_1, GL_ES_VERSION_3_0]
  aka [
    DrawArraysInstancedANGLE, DrawArraysInstancedARB,
    DrawArraysInstancedEXT, DrawArraysInstancedNV,
  ]
  fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
  [GL_VERSION_3_1, GL_ES_VERSION_3_0]
  aka [
    DrawElementsInstancedANGLE, DrawElementsInstancedARB,
    DrawElementsInstancedEXT, DrawElementsInstancedNV,
  ]
  fn DrawElementsInstanced(
    mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void,
    instancecount: GLsizei,
  );
  [GL_VERSION_3_1, GL_ES_VERSION_3_2] aka [TexBufferARB, TexBufferEXT, TexBufferOES]
  fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint);
  [GL_VERSION_3_1] fn PrimitiveRestartIndex(index: GLuint);
  [GL_VERSION_3_1, GL_ES_VERSION_3_0] aka [CopyBufferSubDataNV]
  fn CopyBufferSubData(
    read_target: GLenum, write_target: GLenum, read_offset: GLintptr,
    write_offset: GLintptr, size: GLsizeiptr,
  );
  [GL_VERSION_3_1, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  fn GetUniformIndices(
    program: GLuint, uniform_count: GLsizei,
    uniform_names: *const *const GLchar, uniform_indices: *mut GLuint,
  );
  [GL_VERSION_3_1, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  fn GetActiveUniformsiv(
    program: GLuint, uniform_count: GLsizei, uniform_indices: *const GLuint,
    pname: GLenum, params: *mut GLint,
  );
  [GL_VERSION_3_1, GL_ARB_uniform_buffer_object] fn GetActiveUniformName(
    program: GLuint, uniform_index: GLuint, buf_size: GLsizei,
    length: *mut GLsizei, uniform_name: *mut GLchar,
  );
  [GL_VERSION_3_1, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  fn GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
  [GL_VERSION_3_1, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  fn GetActiveUniformBlockiv(
    program: GLuint, uniform_block_index: GLuint, pname: GLenum,
    params: *mut GLint,
  );
  [GL_VERSION_3_1, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  fn GetActiveUniformBlockName(
    program: GLuint, uniform_block_index: GLuint, buf_size: GLsizei,
    length: *mut GLsizei, uniform_block_name: *mut GLchar,
  );
  [GL_VERSION_3_1, GL_ES_VERSION_3_0, GL_ARB_uniform_buffer_object]
  fn UniformBlockBinding(
    program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint,
  );

  // GL 3.2

  [GL_VERSION_3_2, GL_ES_VERSION_3_2] aka [DrawElementsBaseVertexEXT, DrawElementsBaseVertexOES]
  fn DrawElementsBaseVertex(
    mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void,
    basevertex: GLint,
  );
  [GL_VERSION_3_2, GL_ES_VERSION_3_2]
  aka [DrawRangeElementsBaseVertexEXT, DrawRangeElementsBaseVertexOES]
  fn DrawRangeElementsBaseVertex(
    mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, ty: GLenum,
    indices: *const c_void, basevertex: GLint,
  );
  [GL_VERSION_3_2, GL_ES_VERSION_3_2]
  aka [DrawElementsInstancedBaseVertexEXT, DrawElementsInstancedBaseVertexOES]
  fn DrawElementsInstancedBaseVertex(
    mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void,
    instancecount: GLsizei, basevertex: GLint,
  );
  [GL_VERSION_3_2] aka [MultiDrawElementsBaseVertexEXT]
  fn MultiDrawElementsBaseVertex(
    mode: GLenum, count: *const GLsizei, ty: GLenum,
    indices: *const *const c_void, drawcount: GLsizei, basevertex: *const GLint,
  );
  [GL_VERSION_3_2] aka [ProvokingVertexEXT] fn ProvokingVertex(mode: GLenum);
  [GL_VERSION_3_2, GL_ES_VERSION_3_0, GL_ARB_sync] aka [FenceSyncAPPLE]
  fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
  [GL_VERSION_3_2, GL_ES_VERSION_3_0, GL_ARB_sync] aka [IsSyncAPPLE]
  fn IsSync(sync: GLsync) -> GLboolean;
  [GL_VERSION_3_2, GL_ES_VERSION_3_0, GL_ARB_sync] aka [DeleteSyncAPPLE]
  fn DeleteSync(sync: GLsync);
  [GL_VERSION_3_2, GL_ES_VERSION_3_0, GL_ARB_sync] aka [ClientWaitSyncAPPLE]
  fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
  [GL_VERSION_3_2, GL_ES_VERSION_3_0, GL_ARB_sync] aka [WaitSyncAPPLE]
  fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
  [GL_VERSION_3_2, GL_ES_VERSION_3_0, GL_ARB_sync] aka [GetInteger64vAPPLE]
  fn GetInteger64v(pname: GLenum, data: *mut GLint64);
  [GL_VERSION_3_2, GL_ES_VERSION_3_0, GL_ARB_sync] aka [GetSyncivAPPLE]
  fn GetSynciv(
    sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei,
    values: *mut GLint,
  );
  [GL_VERSION_3_2, GL_ES_VERSION_3_0]
  fn GetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
  [GL_VERSION_3_2, GL_ES_VERSION_3_0]
  fn GetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
  [GL_VERSION_3_2, GL_ES_VERSION_3_2]
  aka [FramebufferTextureARB, FramebufferTextureEXT, FramebufferTextureOES]
  fn FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
  [GL_VERSION_3_2] fn TexImage2DMultisample(
    target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, fixedsamplelocations: GLboolean,
  );
  [GL_VERSION_3_2] fn TexImage3DMultisample(
    target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean,
  );
  [GL_VERSION_3_2, GL_ES_VERSION_3_1] aka [GetMultisamplefvNV]
  fn GetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat);
  [GL_VERSION_3_2, GL_ES_VERSION_3_1] fn SampleMaski(mask_number: GLuint, mask: GLbitfield);

  // GL 3.3

  [GL_VERSION_3_3] aka [BindFragDataLocationIndexedEXT]
  fn BindFragDataLocationIndexed(
    program: GLuint, color_number: GLuint, index: GLuint, name: *const GLchar,
  );
  [GL_VERSION_3_3] aka [GetFragDataIndexEXT]
  fn GetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint;
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn GenSamplers(count: GLsizei, samplers: *mut GLuint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn DeleteSamplers(count: GLsizei, samplers: *const GLuint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn IsSampler(sampler: GLuint) -> GLboolean;
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn BindSampler(unit: GLuint, sampler: GLuint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn SamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn SamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);
  [GL_VERSION_3_3, GL_ES_VERSION_3_2, GL_ARB_sampler_objects]
  aka [SamplerParameterIivEXT, SamplerParameterIivOES]
  fn SamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_2, GL_ARB_sampler_objects]
  aka [SamplerParameterIuivEXT, SamplerParameterIuivOES]
  fn SamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn GetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_2, GL_ARB_sampler_objects]
  aka [GetSamplerParameterIivEXT, GetSamplerParameterIivOES]
  fn GetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0, GL_ARB_sampler_objects]
  fn GetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_3_3, GL_ES_VERSION_3_2, GL_ARB_sampler_objects]
  aka [GetSamplerParameterIuivEXT, GetSamplerParameterIuivOES]
  fn GetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint);
  [GL_VERSION_3_3, GL_ARB_timer_query] aka [QueryCounterEXT]
  fn QueryCounter(id: GLuint, target: GLenum);
  [GL_VERSION_3_3, GL_ARB_timer_query] aka [GetQueryObjecti64vEXT]
  fn GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
  [GL_VERSION_3_3, GL_ARB_timer_query] aka [GetQueryObjectui64vEXT]
  fn GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64);
  [GL_VERSION_3_3, GL_ES_VERSION_3_0]
  aka [
    VertexAttribDivisorANGLE, VertexAttribDivisorARB,
    VertexAttribDivisorEXT, VertexAttribDivisorNV,
  ]
  fn VertexAttribDivisor(index: GLuint, divisor: GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP1ui(index: GLuint, ty: GLenum, normalized: GLboolean, value: GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP1uiv(index: GLuint, ty: GLenum, normalized: GLboolean, value: *const GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP2ui(index: GLuint, ty: GLenum, normalized: GLboolean, value: GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP2uiv(index: GLuint, ty: GLenum, normalized: GLboolean, value: *const GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP3ui(index: GLuint, ty: GLenum, normalized: GLboolean, value: GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP3uiv(index: GLuint, ty: GLenum, normalized: GLboolean, value: *const GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP4ui(index: GLuint, ty: GLenum, normalized: GLboolean, value: GLuint);
  [GL_VERSION_3_3]
  fn VertexAttribP4uiv(index: GLuint, ty: GLenum, normalized: GLboolean, value: *const GLuint);

  // GL 3.3, compatibility profile

  [GL_VERSION_3_3 @ Compatibility] fn VertexP2ui(ty: GLenum, value: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn VertexP2uiv(ty: GLenum, value: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn VertexP3ui(ty: GLenum, value: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn VertexP3uiv(ty: GLenum, value: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn VertexP4ui(ty: GLenum, value: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn VertexP4uiv(ty: GLenum, value: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP1ui(ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP1uiv(ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP2ui(ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP2uiv(ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP3ui(ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP3uiv(ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP4ui(ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn TexCoordP4uiv(ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP1ui(texture: GLenum, ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP1uiv(texture: GLenum, ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP2ui(texture: GLenum, ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP2uiv(texture: GLenum, ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP3ui(texture: GLenum, ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP3uiv(texture: GLenum, ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP4ui(texture: GLenum, ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility]
  fn MultiTexCoordP4uiv(texture: GLenum, ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn NormalP3ui(ty: GLenum, coords: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn NormalP3uiv(ty: GLenum, coords: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn ColorP3ui(ty: GLenum, color: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn ColorP3uiv(ty: GLenum, color: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn ColorP4ui(ty: GLenum, color: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn ColorP4uiv(ty: GLenum, color: *const GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn SecondaryColorP3ui(ty: GLenum, color: GLuint);
  [GL_VERSION_3_3 @ Compatibility] fn SecondaryColorP3uiv(ty: GLenum, color: *const GLuint);

  // GL 4.0

  [GL_VERSION_4_0, GL_ES_VERSION_3_2] aka [MinSampleShadingARB, MinSampleShadingOES]
  fn MinSampleShading(value: GLfloat);
  [GL_VERSION_4_0, GL_ES_VERSION_3_2]
  aka [BlendEquationiARB, BlendEquationIndexedAMD, BlendEquationiEXT, BlendEquationiOES]
  fn BlendEquationi(buf: GLuint, mode: GLenum);
  [GL_VERSION_4_0, GL_ES_VERSION_3_2]
  aka [
    BlendEquationSeparateiARB, BlendEquationSeparateIndexedAMD,
    BlendEquationSeparateiEXT, BlendEquationSeparateiOES,
  ]
  fn BlendEquationSeparatei(buf: GLuint, mode_rgb: GLenum, mode_alpha: GLenum);
  [GL_VERSION_4_0, GL_ES_VERSION_3_2]
  aka [BlendFunciARB, BlendFuncIndexedAMD, BlendFunciEXT, BlendFunciOES]
  fn BlendFunci(buf: GLuint, src: GLenum, dst: GLenum);
  [GL_VERSION_4_0, GL_ES_VERSION_3_2]
  aka [
    BlendFuncSeparateiARB, BlendFuncSeparateIndexedAMD,
    BlendFuncSeparateiEXT, BlendFuncSeparateiOES,
  ] fn BlendFuncSeparatei(
    buf: GLuint, src_rgb: GLenum, dst_rgb: GLenum, src_alpha: GLenum,
    dst_alpha: GLenum,
  );
  [GL_VERSION_4_0, GL_ES_VERSION_3_1] fn DrawArraysIndirect(mode: GLenum, indirect: *const c_void);
  [GL_VERSION_4_0, GL_ES_VERSION_3_1]
  fn DrawElementsIndirect(mode: GLenum, ty: GLenum, indirect: *const c_void);
  [GL_VERSION_4_0] fn Uniform1d(location: GLint, x: GLdouble);
  [GL_VERSION_4_0] fn Uniform2d(location: GLint, x: GLdouble, y: GLdouble);
  [GL_VERSION_4_0] fn Uniform3d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_4_0]
  fn Uniform4d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
  [GL_VERSION_4_0] fn Uniform1dv(location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_0] fn Uniform2dv(location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_0] fn Uniform3dv(location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_0] fn Uniform4dv(location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_0] fn UniformMatrix2dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix3dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix4dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix2x3dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix2x4dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix3x2dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix3x4dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix4x2dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn UniformMatrix4x3dv(
    location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_0] fn GetUniformdv(program: GLuint, location: GLint, params: *mut GLdouble);
  [GL_VERSION_4_0] fn GetSubroutineUniformLocation(
    program: GLuint, shadertype: GLenum, name: *const GLchar,
  ) -> GLint;
  [GL_VERSION_4_0]
  fn GetSubroutineIndex(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLuint;
  [GL_VERSION_4_0] fn GetActiveSubroutineUniformiv(
    program: GLuint, shadertype: GLenum, index: GLuint, pname: GLenum,
    values: *mut GLint,
  );
  [GL_VERSION_4_0] fn GetActiveSubroutineUniformName(
    program: GLuint, shadertype: GLenum, index: GLuint, bufsize: GLsizei,
    length: *mut GLsizei, name: *mut GLchar,
  );
  [GL_VERSION_4_0] fn GetActiveSubroutineName(
    program: GLuint, shadertype: GLenum, index: GLuint, bufsize: GLsizei,
    length: *mut GLsizei, name: *mut GLchar,
  );
  [GL_VERSION_4_0]
  fn UniformSubroutinesuiv(shadertype: GLenum, count: GLsizei, indices: *const GLuint);
  [GL_VERSION_4_0]
  fn GetUniformSubroutineuiv(shadertype: GLenum, location: GLint, params: *mut GLuint);
  [GL_VERSION_4_0]
  fn GetProgramStageiv(program: GLuint, shadertype: GLenum, pname: GLenum, values: *mut GLint);
  [GL_VERSION_4_0, GL_ES_VERSION_3_2, GL_ARB_tessellation_shader]
  aka [PatchParameteriEXT, PatchParameteriOES]
  fn PatchParameteri(pname: GLenum, value: GLint);
  [GL_VERSION_4_0, GL_ARB_tessellation_shader]
  fn PatchParameterfv(pname: GLenum, values: *const GLfloat);
  [GL_VERSION_4_0, GL_ES_VERSION_3_0] fn BindTransformFeedback(target: GLenum, id: GLuint);
  [GL_VERSION_4_0, GL_ES_VERSION_3_0] aka [DeleteTransformFeedbacksNV]
  fn DeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint);
  [GL_VERSION_4_0, GL_ES_VERSION_3_0] aka [GenTransformFeedbacksNV]
  fn GenTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
  [GL_VERSION_4_0, GL_ES_VERSION_3_0] aka [IsTransformFeedbackNV]
  fn IsTransformFeedback(id: GLuint) -> GLboolean;
  [GL_VERSION_4_0, GL_ES_VERSION_3_0] aka [PauseTransformFeedbackNV] fn PauseTransformFeedback();
  [GL_VERSION_4_0, GL_ES_VERSION_3_0] aka [ResumeTransformFeedbackNV] fn ResumeTransformFeedback();
  [GL_VERSION_4_0] fn DrawTransformFeedback(mode: GLenum, id: GLuint);
  [GL_VERSION_4_0] fn DrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint);
  [GL_VERSION_4_0] fn BeginQueryIndexed(target: GLenum, index: GLuint, id: GLuint);
  [GL_VERSION_4_0] fn EndQueryIndexed(target: GLenum, index: GLuint);
  [GL_VERSION_4_0]
  fn GetQueryIndexediv(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);

  // GL 4.1

  [GL_VERSION_4_1, GL_ES_VERSION_2_0] fn ReleaseShaderCompiler();
  [GL_VERSION_4_1, GL_ES_VERSION_2_0] fn ShaderBinary(
    count: GLsizei, shaders: *const GLuint, binaryformat: GLenum,
    binary: *const c_void, length: GLsizei,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_2_0] fn GetShaderPrecisionFormat(
    shadertype: GLenum, precisiontype: GLenum, range: *mut GLint,
    precision: *mut GLint,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_2_0] aka [DepthRangefOES] fn DepthRangef(n: GLfloat, f: GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_2_0] aka [ClearDepthfOES] fn ClearDepthf(d: GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_3_0, GL_ARB_get_program_binary] aka [GetProgramBinaryOES]
  fn GetProgramBinary(
    program: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    binary_format: *mut GLenum, binary: *mut c_void,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_0, GL_ARB_get_program_binary] aka [ProgramBinaryOES]
  fn ProgramBinary(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei);
  [GL_VERSION_4_1, GL_ES_VERSION_3_0, GL_ARB_get_program_binary]
  aka [ProgramParameteriARB, ProgramParameteriEXT]
  fn ProgramParameteri(program: GLuint, pname: GLenum, value: GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn UseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn ActiveShaderProgram(pipeline: GLuint, program: GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn CreateShaderProgramv(ty: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn BindProgramPipeline(pipeline: GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn DeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn GenProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn IsProgramPipeline(pipeline: GLuint) -> GLboolean;
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn GetProgramPipelineiv(pipeline: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform1iEXT]
  fn ProgramUniform1i(program: GLuint, location: GLint, v0: GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform2iEXT]
  fn ProgramUniform2i(program: GLuint, location: GLint, v0: GLint, v1: GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform3iEXT]
  fn ProgramUniform3i(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform4iEXT]
  fn ProgramUniform4i(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform1ivEXT]
  fn ProgramUniform1iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform2ivEXT]
  fn ProgramUniform2iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform3ivEXT]
  fn ProgramUniform3iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform4ivEXT]
  fn ProgramUniform4iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform1fEXT]
  fn ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform2fEXT]
  fn ProgramUniform2f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform3fEXT]
  fn ProgramUniform3f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform4fEXT]
  fn ProgramUniform4f(
    program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat,
    v3: GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform1fvEXT]
  fn ProgramUniform1fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform2fvEXT]
  fn ProgramUniform2fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform3fvEXT]
  fn ProgramUniform3fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform4fvEXT]
  fn ProgramUniform4fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects]
  fn ProgramUniform1d(program: GLuint, location: GLint, v0: GLdouble);
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects]
  fn ProgramUniform2d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble);
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects]
  fn ProgramUniform3d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble);
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniform4d(
    program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble,
    v3: GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects]
  fn ProgramUniform1dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects]
  fn ProgramUniform2dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects]
  fn ProgramUniform3dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects]
  fn ProgramUniform4dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform1uiEXT]
  fn ProgramUniform1ui(program: GLuint, location: GLint, v0: GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform2uiEXT]
  fn ProgramUniform2ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform3uiEXT]
  fn ProgramUniform3ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform4uiEXT]
  fn ProgramUniform4ui(
    program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint,
    v3: GLuint,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform1uivEXT]
  fn ProgramUniform1uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform2uivEXT]
  fn ProgramUniform2uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform3uivEXT]
  fn ProgramUniform3uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects] aka [ProgramUniform4uivEXT]
  fn ProgramUniform4uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix2fvEXT] fn ProgramUniformMatrix2fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix3fvEXT] fn ProgramUniformMatrix3fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix4fvEXT] fn ProgramUniformMatrix4fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix2dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix3dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix4dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix2x3fvEXT] fn ProgramUniformMatrix2x3fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix3x2fvEXT] fn ProgramUniformMatrix3x2fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix2x4fvEXT] fn ProgramUniformMatrix2x4fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix4x2fvEXT] fn ProgramUniformMatrix4x2fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix3x4fvEXT] fn ProgramUniformMatrix3x4fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  aka [ProgramUniformMatrix4x3fvEXT] fn ProgramUniformMatrix4x3fv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix2x3dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix3x2dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix2x4dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix4x2dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix3x4dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ARB_separate_shader_objects] fn ProgramUniformMatrix4x3dv(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn ValidateProgramPipeline(pipeline: GLuint);
  [GL_VERSION_4_1, GL_ES_VERSION_3_1, GL_ARB_separate_shader_objects]
  fn GetProgramPipelineInfoLog(
    pipeline: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    info_log: *mut GLchar,
  );
  [GL_VERSION_4_1] fn VertexAttribL1d(index: GLuint, x: GLdouble);
  [GL_VERSION_4_1] fn VertexAttribL2d(index: GLuint, x: GLdouble, y: GLdouble);
  [GL_VERSION_4_1] fn VertexAttribL3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_VERSION_4_1]
  fn VertexAttribL4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
  [GL_VERSION_4_1] fn VertexAttribL1dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_4_1] fn VertexAttribL2dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_4_1] fn VertexAttribL3dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_4_1] fn VertexAttribL4dv(index: GLuint, v: *const GLdouble);
  [GL_VERSION_4_1] fn VertexAttribLPointer(
    index: GLuint, size: GLint, ty: GLenum, stride: GLsizei,
    pointer: *const c_void,
  );
  [GL_VERSION_4_1] fn GetVertexAttribLdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
  [GL_VERSION_4_1] aka [ViewportArrayvNV, ViewportArrayvOES]
  fn ViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat);
  [GL_VERSION_4_1] aka [ViewportIndexedfOES, ViewportIndexedfNV]
  fn ViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
  [GL_VERSION_4_1] aka [ViewportIndexedfvOES, ViewportIndexedfvNV]
  fn ViewportIndexedfv(index: GLuint, v: *const GLfloat);
  [GL_VERSION_4_1] aka [ScissorArrayvNV, ScissorArrayvOES]
  fn ScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint);
  [GL_VERSION_4_1] aka [ScissorIndexedNV, ScissorIndexedOES]
  fn ScissorIndexed(index: GLuint, left: GLint, bottom: GLint, width: GLsizei, height: GLsizei);
  [GL_VERSION_4_1] aka [ScissorIndexedvNV, ScissorIndexedvOES]
  fn ScissorIndexedv(index: GLuint, v: *const GLint);
  [GL_VERSION_4_1] fn DepthRangeArrayv(first: GLuint, count: GLsizei, v: *const GLdouble);
  [GL_VERSION_4_1] fn DepthRangeIndexed(index: GLuint, n: GLdouble, f: GLdouble);
  [GL_VERSION_4_1] aka [GetFloati_vNV, GetFloati_vOES]
  fn GetFloati_v(target: GLenum, index: GLuint, data: *mut GLfloat);
  [GL_VERSION_4_1] fn GetDoublei_v(target: GLenum, index: GLuint, data: *mut GLdouble);

  // GL 4.2

  [GL_VERSION_4_2] aka [DrawArraysInstancedBaseInstanceEXT]
  fn DrawArraysInstancedBaseInstance(
    mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei,
    baseinstance: GLuint,
  );
  [GL_VERSION_4_2] aka [DrawElementsInstancedBaseInstanceEXT]
  fn DrawElementsInstancedBaseInstance(
    mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void,
    instancecount: GLsizei, baseinstance: GLuint,
  );
  [GL_VERSION_4_2] aka [DrawElementsInstancedBaseVertexBaseInstanceEXT]
  fn DrawElementsInstancedBaseVertexBaseInstance(
    mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void,
    instancecount: GLsizei, basevertex: GLint, baseinstance: GLuint,
  );
  [GL_VERSION_4_2, GL_ES_VERSION_3_0] fn GetInternalformativ(
    target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei,
    params: *mut GLint,
  );
  [GL_VERSION_4_2, GL_ARB_shader_atomic_counters]
  fn GetActiveAtomicCounterBufferiv(
    program: GLuint, buffer_index: GLuint, pname: GLenum, params: *mut GLint,
  );
  [GL_VERSION_4_2, GL_ES_VERSION_3_1, GL_ARB_shader_image_load_store] aka [BindImageTextureEXT]
  fn BindImageTexture(
    unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean,
    layer: GLint, access: GLenum, format: GLenum,
  );
  [GL_VERSION_4_2, GL_ES_VERSION_3_1, GL_ARB_shader_image_load_store] aka [MemoryBarrierEXT]
  fn MemoryBarrier(barriers: GLbitfield);
  [GL_VERSION_4_2, GL_ARB_texture_storage] aka [TexStorage1DEXT]
  fn TexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei);
  [GL_VERSION_4_2, GL_ES_VERSION_3_0, GL_ARB_texture_storage] aka [TexStorage2DEXT]
  fn TexStorage2D(
    target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei,
  );
  [GL_VERSION_4_2, GL_ES_VERSION_3_0, GL_ARB_texture_storage] aka [TexStorage3DEXT]
  fn TexStorage3D(
    target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, depth: GLsizei,
  );
  [GL_VERSION_4_2]
  fn DrawTransformFeedbackInstanced(mode: GLenum, id: GLuint, instancecount: GLsizei);
  [GL_VERSION_4_2] fn DrawTransformFeedbackStreamInstanced(
    mode: GLenum, id: GLuint, stream: GLuint, instancecount: GLsizei,
  );

  // GL 4.3

  [GL_VERSION_4_3] fn ClearBufferData(
    target: GLenum, internalformat: GLenum, format: GLenum, ty: GLenum,
    data: *const c_void,
  );
  [GL_VERSION_4_3] fn ClearBufferSubData(
    target: GLenum, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr,
    format: GLenum, ty: GLenum, data: *const c_void,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_compute_shader]
  fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_compute_shader]
  fn DispatchComputeIndirect(indirect: GLintptr);
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_ARB_copy_image]
  aka [CopyImageSubDataEXT, CopyImageSubDataOES] fn CopyImageSubData(
    src_name: GLuint, src_target: GLenum, src_level: GLint, src_x: GLint,
    src_y: GLint, src_z: GLint, dst_name: GLuint, dst_target: GLenum,
    dst_level: GLint, dst_x: GLint, dst_y: GLint, dst_z: GLint,
    src_width: GLsizei, src_height: GLsizei, src_depth: GLsizei,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1]
  fn FramebufferParameteri(target: GLenum, pname: GLenum, param: GLint);
  [GL_VERSION_4_3, GL_ES_VERSION_3_1]
  fn GetFramebufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_VERSION_4_3] fn GetInternalformati64v(
    target: GLenum, internalformat: GLenum, pname: GLenum, buf_size: GLsizei,
    params: *mut GLint64,
  );
  [GL_VERSION_4_3] fn InvalidateTexSubImage(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
  );
  [GL_VERSION_4_3] fn InvalidateTexImage(texture: GLuint, level: GLint);
  [GL_VERSION_4_3] fn InvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
  [GL_VERSION_4_3] fn InvalidateBufferData(buffer: GLuint);
  [GL_VERSION_4_3, GL_ES_VERSION_3_0]
  fn InvalidateFramebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum);
  [GL_VERSION_4_3, GL_ES_VERSION_3_0] fn InvalidateSubFramebuffer(
    target: GLenum, num_attachments: GLsizei, attachments: *const GLenum,
    x: GLint, y: GLint, width: GLsizei, height: GLsizei,
  );
  [GL_VERSION_4_3, GL_ARB_multi_draw_indirect]
  aka [MultiDrawArraysIndirectAMD, MultiDrawArraysIndirectEXT]
  fn MultiDrawArraysIndirect(
    mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei,
  );
  [GL_VERSION_4_3, GL_ARB_multi_draw_indirect]
  aka [MultiDrawElementsIndirectAMD, MultiDrawElementsIndirectEXT]
  fn MultiDrawElementsIndirect(
    mode: GLenum, ty: GLenum, indirect: *const c_void, drawcount: GLsizei,
    stride: GLsizei,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_program_interface_query]
  fn GetProgramInterfaceiv(
    program: GLuint, program_interface: GLenum, pname: GLenum,
    params: *mut GLint,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_program_interface_query]
  fn GetProgramResourceIndex(
    program: GLuint, program_interface: GLenum, name: *const GLchar,
  ) -> GLuint;
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_program_interface_query]
  fn GetProgramResourceName(
    program: GLuint, program_interface: GLenum, index: GLuint,
    buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_program_interface_query]
  fn GetProgramResourceiv(
    program: GLuint, program_interface: GLenum, index: GLuint,
    prop_count: GLsizei, props: *const GLenum, count: GLsizei,
    length: *mut GLsizei, params: *mut GLint,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_program_interface_query]
  fn GetProgramResourceLocation(
    program: GLuint, program_interface: GLenum, name: *const GLchar,
  ) -> GLint;
  [GL_VERSION_4_3, GL_ARB_program_interface_query]
  fn GetProgramResourceLocationIndex(
    program: GLuint, program_interface: GLenum, name: *const GLchar,
  ) -> GLint;
  [GL_VERSION_4_3, GL_ARB_shader_storage_buffer_object]
  fn ShaderStorageBlockBinding(
    program: GLuint, storage_block_index: GLuint, storage_block_binding: GLuint,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_2] aka [TexBufferRangeEXT, TexBufferRangeOES]
  fn TexBufferRange(
    target: GLenum, internalformat: GLenum, buffer: GLuint, offset: GLintptr,
    size: GLsizeiptr,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1] fn TexStorage2DMultisample(
    target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, fixedsamplelocations: GLboolean,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_2] aka [TexStorage3DMultisampleOES]
  fn TexStorage3DMultisample(
    target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean,
  );
  [GL_VERSION_4_3, GL_ARB_texture_view] aka [TextureViewEXT, TextureViewOES]
  fn TextureView(
    texture: GLuint, target: GLenum, origtexture: GLuint,
    internalformat: GLenum, minlevel: GLuint, numlevels: GLuint,
    minlayer: GLuint, numlayers: GLuint,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_vertex_attrib_binding]
  fn BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_vertex_attrib_binding]
  fn VertexAttribFormat(
    attribindex: GLuint, size: GLint, ty: GLenum, normalized: GLboolean,
    relativeoffset: GLuint,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_vertex_attrib_binding]
  fn VertexAttribIFormat(attribindex: GLuint, size: GLint, ty: GLenum, relativeoffset: GLuint);
  [GL_VERSION_4_3, GL_ARB_vertex_attrib_binding]
  fn VertexAttribLFormat(attribindex: GLuint, size: GLint, ty: GLenum, relativeoffset: GLuint);
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_vertex_attrib_binding]
  fn VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
  [GL_VERSION_4_3, GL_ES_VERSION_3_1, GL_ARB_vertex_attrib_binding]
  fn VertexBindingDivisor(bindingindex: GLuint, divisor: GLuint);
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop]
  aka [DebugMessageControlARB, DebugMessageControlKHR] fn DebugMessageControl(
    source: GLenum, ty: GLenum, severity: GLenum, count: GLsizei,
    ids: *const GLuint, enabled: GLboolean,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop]
  aka [DebugMessageInsertARB, DebugMessageInsertKHR] fn DebugMessageInsert(
    source: GLenum, ty: GLenum, id: GLuint, severity: GLenum, length: GLsizei,
    buf: *const GLchar,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop]
  aka [DebugMessageCallbackARB, DebugMessageCallbackKHR]
  fn DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void);
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop]
  aka [GetDebugMessageLogARB, GetDebugMessageLogKHR] fn GetDebugMessageLog(
    count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum,
    ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei,
    message_log: *mut GLchar,
  ) -> GLuint;
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop] aka [PushDebugGroupKHR]
  fn PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop] aka [PopDebugGroupKHR]
  fn PopDebugGroup();
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop] aka [ObjectLabelKHR]
  fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop] aka [GetObjectLabelKHR]
  fn GetObjectLabel(
    identifier: GLenum, name: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    label: *mut GLchar,
  );
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop] aka [ObjectPtrLabelKHR]
  fn ObjectPtrLabel(ptr: *const c_void, length: GLsizei, label: *const GLchar);
  [GL_VERSION_4_3, GL_ES_VERSION_3_2, GL_KHR_debug @ Desktop] aka [GetObjectPtrLabelKHR]
  fn GetObjectPtrLabel(
    ptr: *const c_void, buf_size: GLsizei, length: *mut GLsizei,
    label: *mut GLchar,
  );

  // GL 4.4

  [GL_VERSION_4_4, GL_ARB_buffer_storage] aka [BufferStorageEXT]
  fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
  [GL_VERSION_4_4, GL_ARB_clear_texture] aka [ClearTexImageEXT]
  fn ClearTexImage(texture: GLuint, level: GLint, format: GLenum, ty: GLenum, data: *const c_void);
  [GL_VERSION_4_4, GL_ARB_clear_texture] aka [ClearTexSubImageEXT]
  fn ClearTexSubImage(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    format: GLenum, ty: GLenum, data: *const c_void,
  );
  [GL_VERSION_4_4, GL_ARB_multi_bind]
  fn BindBuffersBase(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint);
  [GL_VERSION_4_4, GL_ARB_multi_bind] fn BindBuffersRange(
    target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint,
    offsets: *const GLintptr, sizes: *const GLsizeiptr,
  );
  [GL_VERSION_4_4, GL_ARB_multi_bind]
  fn BindTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
  [GL_VERSION_4_4, GL_ARB_multi_bind]
  fn BindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint);
  [GL_VERSION_4_4, GL_ARB_multi_bind]
  fn BindImageTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
  [GL_VERSION_4_4, GL_ARB_multi_bind] fn BindVertexBuffers(
    first: GLuint, count: GLsizei, buffers: *const GLuint,
    offsets: *const GLintptr, strides: *const GLsizei,
  );

  // GL 4.5

  [GL_VERSION_4_5, GL_ARB_clip_control] aka [ClipControlEXT]
  fn ClipControl(origin: GLenum, depth: GLenum);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CreateTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TransformFeedbackBufferBase(xfb: GLuint, index: GLuint, buffer: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TransformFeedbackBufferRange(
    xfb: GLuint, index: GLuint, buffer: GLuint, offset: GLintptr,
    size: GLsizeiptr,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTransformFeedbackiv(xfb: GLuint, pname: GLenum, param: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTransformFeedbacki_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTransformFeedbacki64_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint64);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CreateBuffers(n: GLsizei, buffers: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CopyNamedBufferSubData(
    read_buffer: GLuint, write_buffer: GLuint, read_offset: GLintptr,
    write_offset: GLintptr, size: GLsizeiptr,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn ClearNamedBufferData(
    buffer: GLuint, internalformat: GLenum, format: GLenum, ty: GLenum,
    data: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn ClearNamedBufferSubData(
    buffer: GLuint, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr,
    format: GLenum, ty: GLenum, data: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn MapNamedBuffer(buffer: GLuint, access: GLenum) -> *mut c_void;
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn MapNamedBufferRange(
    buffer: GLuint, offset: GLintptr, length: GLsizeiptr, access: GLbitfield,
  ) -> *mut c_void;
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn UnmapNamedBuffer(buffer: GLuint) -> GLboolean;
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn FlushMappedNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetNamedBufferParameteriv(buffer: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetNamedBufferParameteri64v(buffer: GLuint, pname: GLenum, params: *mut GLint64);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetNamedBufferPointerv(buffer: GLuint, pname: GLenum, params: *const *mut c_void);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn NamedFramebufferRenderbuffer(
    framebuffer: GLuint, attachment: GLenum, renderbuffertarget: GLenum,
    renderbuffer: GLuint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedFramebufferParameteri(framebuffer: GLuint, pname: GLenum, param: GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn NamedFramebufferTexture(
    framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn NamedFramebufferTextureLayer(
    framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint,
    layer: GLint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedFramebufferDrawBuffer(framebuffer: GLuint, buf: GLenum);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedFramebufferDrawBuffers(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedFramebufferReadBuffer(framebuffer: GLuint, src: GLenum);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn InvalidateNamedFramebufferData(
    framebuffer: GLuint, num_attachments: GLsizei, attachments: *const GLenum,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn InvalidateNamedFramebufferSubData(
    framebuffer: GLuint, num_attachments: GLsizei, attachments: *const GLenum,
    x: GLint, y: GLint, width: GLsizei, height: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn ClearNamedFramebufferiv(
    framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn ClearNamedFramebufferuiv(
    framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
    value: *const GLuint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn ClearNamedFramebufferfv(
    framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
    value: *const GLfloat,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn ClearNamedFramebufferfi(
    framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, depth: GLfloat,
    stencil: GLint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn BlitNamedFramebuffer(
    read_framebuffer: GLuint, draw_framebuffer: GLuint, src_x0: GLint,
    src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint,
    dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CheckNamedFramebufferStatus(framebuffer: GLuint, target: GLenum) -> GLenum;
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetNamedFramebufferParameteriv(framebuffer: GLuint, pname: GLenum, param: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetNamedFramebufferAttachmentParameteriv(
    framebuffer: GLuint, attachment: GLenum, pname: GLenum, params: *mut GLint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CreateRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn NamedRenderbufferStorage(
    renderbuffer: GLuint, internalformat: GLenum, width: GLsizei,
    height: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn NamedRenderbufferStorageMultisample(
    renderbuffer: GLuint, samples: GLsizei, internalformat: GLenum,
    width: GLsizei, height: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetNamedRenderbufferParameteriv(renderbuffer: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureBuffer(texture: GLuint, internalformat: GLenum, buffer: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureBufferRange(
    texture: GLuint, internalformat: GLenum, buffer: GLuint, offset: GLintptr,
    size: GLsizeiptr,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureStorage1D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureStorage2D(
    texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureStorage3D(
    texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, depth: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureStorage2DMultisample(
    texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, fixedsamplelocations: GLboolean,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureStorage3DMultisample(
    texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei,
    height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureSubImage1D(
    texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei,
    format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureSubImage2D(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn TextureSubImage3D(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CompressedTextureSubImage1D(
    texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei,
    format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CompressedTextureSubImage2D(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei,
    data: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CompressedTextureSubImage3D(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CopyTextureSubImage1D(
    texture: GLuint, level: GLint, xoffset: GLint, x: GLint, y: GLint,
    width: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CopyTextureSubImage2D(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint,
    y: GLint, width: GLsizei, height: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CopyTextureSubImage3D(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureParameterf(texture: GLuint, pname: GLenum, param: GLfloat);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureParameterfv(texture: GLuint, pname: GLenum, param: *const GLfloat);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureParameteri(texture: GLuint, pname: GLenum, param: GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureParameterIiv(texture: GLuint, pname: GLenum, params: *const GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureParameterIuiv(texture: GLuint, pname: GLenum, params: *const GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn TextureParameteriv(texture: GLuint, pname: GLenum, param: *const GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn GenerateTextureMipmap(texture: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn BindTextureUnit(unit: GLuint, texture: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn GetTextureImage(
    texture: GLuint, level: GLint, format: GLenum, ty: GLenum,
    buf_size: GLsizei, pixels: *mut c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn GetCompressedTextureImage(
    texture: GLuint, level: GLint, buf_size: GLsizei, pixels: *mut c_void,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTextureLevelParameterfv(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTextureLevelParameteriv(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTextureParameterfv(texture: GLuint, pname: GLenum, params: *mut GLfloat);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTextureParameterIiv(texture: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTextureParameterIuiv(texture: GLuint, pname: GLenum, params: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetTextureParameteriv(texture: GLuint, pname: GLenum, params: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CreateVertexArrays(n: GLsizei, arrays: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn DisableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn EnableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn VertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn VertexArrayVertexBuffer(
    vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: GLintptr,
    stride: GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn VertexArrayVertexBuffers(
    vaobj: GLuint, first: GLuint, count: GLsizei, buffers: *const GLuint,
    offsets: *const GLintptr, strides: *const GLsizei,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn VertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn VertexArrayAttribFormat(
    vaobj: GLuint, attribindex: GLuint, size: GLint, ty: GLenum,
    normalized: GLboolean, relativeoffset: GLuint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn VertexArrayAttribIFormat(
    vaobj: GLuint, attribindex: GLuint, size: GLint, ty: GLenum,
    relativeoffset: GLuint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn VertexArrayAttribLFormat(
    vaobj: GLuint, attribindex: GLuint, size: GLint, ty: GLenum,
    relativeoffset: GLuint,
  );
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn VertexArrayBindingDivisor(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetVertexArrayiv(vaobj: GLuint, pname: GLenum, param: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetVertexArrayIndexediv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetVertexArrayIndexed64iv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint64);
  [GL_VERSION_4_5, GL_ARB_direct_state_access] fn CreateSamplers(n: GLsizei, samplers: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn CreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetQueryBufferObjecti64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetQueryBufferObjectiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetQueryBufferObjectui64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
  [GL_VERSION_4_5, GL_ARB_direct_state_access]
  fn GetQueryBufferObjectuiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
  [GL_VERSION_4_5, GL_ES_VERSION_3_1] fn MemoryBarrierByRegion(barriers: GLbitfield);
  [GL_VERSION_4_5] fn GetTextureSubImage(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    format: GLenum, ty: GLenum, buf_size: GLsizei, pixels: *mut c_void,
  );
  [GL_VERSION_4_5] fn GetCompressedTextureSubImage(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    buf_size: GLsizei, pixels: *mut c_void,
  );
  [GL_VERSION_4_5, GL_ES_VERSION_3_2] aka [GetGraphicsResetStatusEXT, GetGraphicsResetStatusKHR]
  fn GetGraphicsResetStatus() -> GLenum;
  [GL_VERSION_4_5]
  fn GetnCompressedTexImage(target: GLenum, lod: GLint, buf_size: GLsizei, pixels: *mut c_void);
  [GL_VERSION_4_5] fn GetnTexImage(
    target: GLenum, level: GLint, format: GLenum, ty: GLenum, buf_size: GLsizei,
    pixels: *mut c_void,
  );
  [GL_VERSION_4_5]
  fn GetnUniformdv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLdouble);
  [GL_VERSION_4_5, GL_ES_VERSION_3_2] aka [GetnUniformfvARB, GetnUniformfvEXT, GetnUniformfvKHR]
  fn GetnUniformfv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLfloat);
  [GL_VERSION_4_5, GL_ES_VERSION_3_2] aka [GetnUniformivARB, GetnUniformivEXT, GetnUniformivKHR]
  fn GetnUniformiv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLint);
  [GL_VERSION_4_5, GL_ES_VERSION_3_2] aka [GetnUniformuivARB, GetnUniformuivKHR]
  fn GetnUniformuiv(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLuint);
  [GL_VERSION_4_5, GL_ES_VERSION_3_2] aka [ReadnPixelsARB, ReadnPixelsEXT, ReadnPixelsKHR]
  fn ReadnPixels(
    x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum,
    ty: GLenum, buf_size: GLsizei, data: *mut c_void,
  );
  [GL_VERSION_4_5, GL_ARB_texture_barrier] fn TextureBarrier();

  // GL 4.5, compatibility profile

  [GL_VERSION_4_5 @ Compatibility]
  fn GetnMapdv(target: GLenum, query: GLenum, buf_size: GLsizei, v: *mut GLdouble);
  [GL_VERSION_4_5 @ Compatibility]
  fn GetnMapfv(target: GLenum, query: GLenum, buf_size: GLsizei, v: *mut GLfloat);
  [GL_VERSION_4_5 @ Compatibility]
  fn GetnMapiv(target: GLenum, query: GLenum, buf_size: GLsizei, v: *mut GLint);
  [GL_VERSION_4_5 @ Compatibility]
  fn GetnPixelMapfv(map: GLenum, buf_size: GLsizei, values: *mut GLfloat);
  [GL_VERSION_4_5 @ Compatibility]
  fn GetnPixelMapuiv(map: GLenum, buf_size: GLsizei, values: *mut GLuint);
  [GL_VERSION_4_5 @ Compatibility]
  fn GetnPixelMapusv(map: GLenum, buf_size: GLsizei, values: *mut GLushort);
  [GL_VERSION_4_5 @ Compatibility] fn GetnPolygonStipple(buf_size: GLsizei, pattern: *mut GLubyte);
  [GL_VERSION_4_5 @ Compatibility] fn GetnColorTable(
    target: GLenum, format: GLenum, ty: GLenum, buf_size: GLsizei,
    table: *mut c_void,
  );
  [GL_VERSION_4_5 @ Compatibility] fn GetnConvolutionFilter(
    target: GLenum, format: GLenum, ty: GLenum, buf_size: GLsizei,
    image: *mut c_void,
  );
  [GL_VERSION_4_5 @ Compatibility] fn GetnSeparableFilter(
    target: GLenum, format: GLenum, ty: GLenum, row_buf_size: GLsizei,
    row: *mut c_void, column_buf_size: GLsizei, column: *mut c_void,
    span: *mut c_void,
  );
  [GL_VERSION_4_5 @ Compatibility] fn GetnHistogram(
    target: GLenum, reset: GLboolean, format: GLenum, ty: GLenum,
    buf_size: GLsizei, values: *mut c_void,
  );
  [GL_VERSION_4_5 @ Compatibility] fn GetnMinmax(
    target: GLenum, reset: GLboolean, format: GLenum, ty: GLenum,
    buf_size: GLsizei, values: *mut c_void,
  );

  // GL 4.6

  [GL_VERSION_4_6] aka [SpecializeShaderARB] fn SpecializeShader(
    shader: GLuint, entry_point: *const GLchar,
    num_specialization_constants: GLuint, constant_index: *const GLuint,
    constant_value: *const GLuint,
  );
  [GL_VERSION_4_6] aka [MultiDrawArraysIndirectCountARB]
  fn MultiDrawArraysIndirectCount(
    mode: GLenum, indirect: *const c_void, drawcount: GLintptr,
    maxdrawcount: GLsizei, stride: GLsizei,
  );
  [GL_VERSION_4_6] aka [MultiDrawElementsIndirectCountARB]
  fn MultiDrawElementsIndirectCount(
    mode: GLenum, ty: GLenum, indirect: *const c_void, drawcount: GLintptr,
    maxdrawcount: GLsizei, stride: GLsizei,
  );
  [GL_VERSION_4_6] aka [PolygonOffsetClampEXT]
  fn PolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat);

  // GLES 3.2

  [GL_ES_VERSION_3_2] aka [BlendBarrierKHR, BlendBarrierNV] fn BlendBarrier();
  [GL_ES_VERSION_3_2]
  aka [PrimitiveBoundingBoxARB, PrimitiveBoundingBoxEXT, PrimitiveBoundingBoxOES]
  fn PrimitiveBoundingBox(
    min_x: GLfloat, min_y: GLfloat, min_z: GLfloat, min_w: GLfloat,
    max_x: GLfloat, max_y: GLfloat, max_z: GLfloat, max_w: GLfloat,
  );

  // GL_APPLE_vertex_array_object

  [GL_APPLE_vertex_array_object] fn BindVertexArrayAPPLE(array: GLuint);
  [GL_APPLE_vertex_array_object] fn DeleteVertexArraysAPPLE(n: GLsizei, arrays: *const GLuint);
  [GL_APPLE_vertex_array_object] fn GenVertexArraysAPPLE(n: GLsizei, arrays: *mut GLuint);
  [GL_APPLE_vertex_array_object] fn IsVertexArrayAPPLE(array: GLuint) -> GLboolean;

  // GL_ARB_bindless_texture

  [GL_ARB_bindless_texture] fn GetTextureHandleARB(texture: GLuint) -> GLuint64;
  [GL_ARB_bindless_texture]
  fn GetTextureSamplerHandleARB(texture: GLuint, sampler: GLuint) -> GLuint64;
  [GL_ARB_bindless_texture] fn MakeTextureHandleResidentARB(handle: GLuint64);
  [GL_ARB_bindless_texture] fn MakeTextureHandleNonResidentARB(handle: GLuint64);
  [GL_ARB_bindless_texture] fn GetImageHandleARB(
    texture: GLuint, level: GLint, layered: GLboolean, layer: GLint,
    format: GLenum,
  ) -> GLuint64;
  [GL_ARB_bindless_texture] fn MakeImageHandleResidentARB(handle: GLuint64, access: GLenum);
  [GL_ARB_bindless_texture] fn MakeImageHandleNonResidentARB(handle: GLuint64);
  [GL_ARB_bindless_texture] fn UniformHandleui64ARB(location: GLint, value: GLuint64);
  [GL_ARB_bindless_texture]
  fn UniformHandleui64vARB(location: GLint, count: GLsizei, value: *const GLuint64);
  [GL_ARB_bindless_texture]
  fn ProgramUniformHandleui64ARB(program: GLuint, location: GLint, value: GLuint64);
  [GL_ARB_bindless_texture] fn ProgramUniformHandleui64vARB(
    program: GLuint, location: GLint, count: GLsizei, values: *const GLuint64,
  );
  [GL_ARB_bindless_texture] fn IsTextureHandleResidentARB(handle: GLuint64) -> GLboolean;
  [GL_ARB_bindless_texture] fn IsImageHandleResidentARB(handle: GLuint64) -> GLboolean;
  [GL_ARB_bindless_texture] fn VertexAttribL1ui64ARB(index: GLuint, x: GLuint64EXT);
  [GL_ARB_bindless_texture] fn VertexAttribL1ui64vARB(index: GLuint, v: *const GLuint64EXT);
  [GL_ARB_bindless_texture]
  fn GetVertexAttribLui64vARB(index: GLuint, pname: GLenum, params: *mut GLuint64EXT);

  // GL_ARB_debug_output

  [GL_ARB_debug_output] fn DebugMessageControlARB(
    source: GLenum, ty: GLenum, severity: GLenum, count: GLsizei,
    ids: *const GLuint, enabled: GLboolean,
  );
  [GL_ARB_debug_output] fn DebugMessageInsertARB(
    source: GLenum, ty: GLenum, id: GLuint, severity: GLenum, length: GLsizei,
    buf: *const GLchar,
  );
  [GL_ARB_debug_output]
  fn DebugMessageCallbackARB(callback: GLDEBUGPROC, user_param: *const c_void);
  [GL_ARB_debug_output] fn GetDebugMessageLogARB(
    count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum,
    ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei,
    message_log: *mut GLchar,
  ) -> GLuint;

  // GL_ARB_draw_instanced

  [GL_ARB_draw_instanced]
  fn DrawArraysInstancedARB(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
  [GL_ARB_draw_instanced] fn DrawElementsInstancedARB(
    mode: GLenum, count: GLsizei, ty: GLenum, indices: *const c_void,
    instancecount: GLsizei,
  );

  // GL_ARB_gl_spirv

  [GL_ARB_gl_spirv] fn SpecializeShaderARB(
    shader: GLuint, entry_point: *const GLchar,
    num_specialization_constants: GLuint, constant_index: *const GLuint,
    constant_value: *const GLuint,
  );

  // GL_ARB_gpu_shader_int64

  [GL_ARB_gpu_shader_int64] fn Uniform1i64ARB(location: GLint, x: GLint64);
  [GL_ARB_gpu_shader_int64] fn Uniform2i64ARB(location: GLint, x: GLint64, y: GLint64);
  [GL_ARB_gpu_shader_int64] fn Uniform3i64ARB(location: GLint, x: GLint64, y: GLint64, z: GLint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform4i64ARB(location: GLint, x: GLint64, y: GLint64, z: GLint64, w: GLint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform1i64vARB(location: GLint, count: GLsizei, value: *const GLint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform2i64vARB(location: GLint, count: GLsizei, value: *const GLint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform3i64vARB(location: GLint, count: GLsizei, value: *const GLint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform4i64vARB(location: GLint, count: GLsizei, value: *const GLint64);
  [GL_ARB_gpu_shader_int64] fn Uniform1ui64ARB(location: GLint, x: GLuint64);
  [GL_ARB_gpu_shader_int64] fn Uniform2ui64ARB(location: GLint, x: GLuint64, y: GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform3ui64ARB(location: GLint, x: GLuint64, y: GLuint64, z: GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform4ui64ARB(location: GLint, x: GLuint64, y: GLuint64, z: GLuint64, w: GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform1ui64vARB(location: GLint, count: GLsizei, value: *const GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform2ui64vARB(location: GLint, count: GLsizei, value: *const GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform3ui64vARB(location: GLint, count: GLsizei, value: *const GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn Uniform4ui64vARB(location: GLint, count: GLsizei, value: *const GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn GetUniformi64vARB(program: GLuint, location: GLint, params: *mut GLint64);
  [GL_ARB_gpu_shader_int64]
  fn GetUniformui64vARB(program: GLuint, location: GLint, params: *mut GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn GetnUniformi64vARB(program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLint64);
  [GL_ARB_gpu_shader_int64] fn GetnUniformui64vARB(
    program: GLuint, location: GLint, buf_size: GLsizei, params: *mut GLuint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform1i64ARB(program: GLuint, location: GLint, x: GLint64);
  [GL_ARB_gpu_shader_int64]
  fn ProgramUniform2i64ARB(program: GLuint, location: GLint, x: GLint64, y: GLint64);
  [GL_ARB_gpu_shader_int64]
  fn ProgramUniform3i64ARB(program: GLuint, location: GLint, x: GLint64, y: GLint64, z: GLint64);
  [GL_ARB_gpu_shader_int64] fn ProgramUniform4i64ARB(
    program: GLuint, location: GLint, x: GLint64, y: GLint64, z: GLint64,
    w: GLint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform1i64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform2i64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform3i64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform4i64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLint64,
  );
  [GL_ARB_gpu_shader_int64]
  fn ProgramUniform1ui64ARB(program: GLuint, location: GLint, x: GLuint64);
  [GL_ARB_gpu_shader_int64]
  fn ProgramUniform2ui64ARB(program: GLuint, location: GLint, x: GLuint64, y: GLuint64);
  [GL_ARB_gpu_shader_int64] fn ProgramUniform3ui64ARB(
    program: GLuint, location: GLint, x: GLuint64, y: GLuint64, z: GLuint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform4ui64ARB(
    program: GLuint, location: GLint, x: GLuint64, y: GLuint64, z: GLuint64,
    w: GLuint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform1ui64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLuint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform2ui64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLuint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform3ui64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLuint64,
  );
  [GL_ARB_gpu_shader_int64] fn ProgramUniform4ui64vARB(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLuint64,
  );

  // GL_ARB_indirect_parameters

  [GL_ARB_indirect_parameters] fn MultiDrawArraysIndirectCountARB(
    mode: GLenum, indirect: *const c_void, drawcount: GLintptr,
    maxdrawcount: GLsizei, stride: GLsizei,
  );
  [GL_ARB_indirect_parameters] fn MultiDrawElementsIndirectCountARB(
    mode: GLenum, ty: GLenum, indirect: *const c_void, drawcount: GLintptr,
    maxdrawcount: GLsizei, stride: GLsizei,
  );

  // GL_ARB_instanced_arrays

  [GL_ARB_instanced_arrays] fn VertexAttribDivisorARB(index: GLuint, divisor: GLuint);

  // GL_EXT_debug_label

  [GL_EXT_debug_label]
  fn LabelObjectEXT(ty: GLenum, object: GLuint, length: GLsizei, label: *const GLchar);
  [GL_EXT_debug_label] fn GetObjectLabelEXT(
    ty: GLenum, object: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    label: *mut GLchar,
  );

  // GL_EXT_direct_state_access

  [GL_EXT_direct_state_access @ Compatibility] fn ClientAttribDefaultEXT(mask: GLbitfield);
  [GL_EXT_direct_state_access @ Compatibility] fn PushClientAttribDefaultEXT(mask: GLbitfield);
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixLoadfEXT(mode: GLenum, m: *const GLfloat);
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixLoaddEXT(mode: GLenum, m: *const GLdouble);
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixMultfEXT(mode: GLenum, m: *const GLfloat);
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixMultdEXT(mode: GLenum, m: *const GLdouble);
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixLoadIdentityEXT(mode: GLenum);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixRotatefEXT(mode: GLenum, angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixRotatedEXT(mode: GLenum, angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixScalefEXT(mode: GLenum, x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixScaledEXT(mode: GLenum, x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixTranslatefEXT(mode: GLenum, x: GLfloat, y: GLfloat, z: GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixTranslatedEXT(mode: GLenum, x: GLdouble, y: GLdouble, z: GLdouble);
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixFrustumEXT(
    mode: GLenum, left: GLdouble, right: GLdouble, bottom: GLdouble,
    top: GLdouble, z_near: GLdouble, z_far: GLdouble,
  );
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixOrthoEXT(
    mode: GLenum, left: GLdouble, right: GLdouble, bottom: GLdouble,
    top: GLdouble, z_near: GLdouble, z_far: GLdouble,
  );
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixPopEXT(mode: GLenum);
  [GL_EXT_direct_state_access @ Compatibility] fn MatrixPushEXT(mode: GLenum);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixLoadTransposefEXT(mode: GLenum, m: *const GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixLoadTransposedEXT(mode: GLenum, m: *const GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixMultTransposefEXT(mode: GLenum, m: *const GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MatrixMultTransposedEXT(mode: GLenum, m: *const GLdouble);
  [GL_EXT_direct_state_access]
  fn TextureParameterfEXT(texture: GLuint, target: GLenum, pname: GLenum, param: GLfloat);
  [GL_EXT_direct_state_access]
  fn TextureParameterfvEXT(texture: GLuint, target: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_EXT_direct_state_access]
  fn TextureParameteriEXT(texture: GLuint, target: GLenum, pname: GLenum, param: GLint);
  [GL_EXT_direct_state_access]
  fn TextureParameterivEXT(texture: GLuint, target: GLenum, pname: GLenum, params: *const GLint);
  [GL_EXT_direct_state_access] fn TextureImage1DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLint,
    width: GLsizei, border: GLint, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn TextureImage2DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLint,
    width: GLsizei, height: GLsizei, border: GLint, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn TextureSubImage1DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    width: GLsizei, format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn TextureSubImage2DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CopyTextureImage1DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLenum,
    x: GLint, y: GLint, width: GLsizei, border: GLint,
  );
  [GL_EXT_direct_state_access] fn CopyTextureImage2DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLenum,
    x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint,
  );
  [GL_EXT_direct_state_access] fn CopyTextureSubImage1DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint, x: GLint,
    y: GLint, width: GLsizei,
  );
  [GL_EXT_direct_state_access] fn CopyTextureSubImage2DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei,
  );
  [GL_EXT_direct_state_access] fn GetTextureImageEXT(
    texture: GLuint, target: GLenum, level: GLint, format: GLenum, ty: GLenum,
    pixels: *mut c_void,
  );
  [GL_EXT_direct_state_access]
  fn GetTextureParameterfvEXT(texture: GLuint, target: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_EXT_direct_state_access]
  fn GetTextureParameterivEXT(texture: GLuint, target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access] fn GetTextureLevelParameterfvEXT(
    texture: GLuint, target: GLenum, level: GLint, pname: GLenum,
    params: *mut GLfloat,
  );
  [GL_EXT_direct_state_access] fn GetTextureLevelParameterivEXT(
    texture: GLuint, target: GLenum, level: GLint, pname: GLenum,
    params: *mut GLint,
  );
  [GL_EXT_direct_state_access] fn TextureImage3DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLint,
    width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint,
    format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn TextureSubImage3DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei,
    depth: GLsizei, format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CopyTextureSubImage3DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei,
    height: GLsizei,
  );
  [GL_EXT_direct_state_access]
  fn BindMultiTextureEXT(texunit: GLenum, target: GLenum, texture: GLuint);
  [GL_EXT_direct_state_access @ Compatibility] fn MultiTexCoordPointerEXT(
    texunit: GLenum, size: GLint, ty: GLenum, stride: GLsizei,
    pointer: *const c_void,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexEnvfEXT(texunit: GLenum, target: GLenum, pname: GLenum, param: GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexEnvfvEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexEnviEXT(texunit: GLenum, target: GLenum, pname: GLenum, param: GLint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexEnvivEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *const GLint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexGendEXT(texunit: GLenum, coord: GLenum, pname: GLenum, param: GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexGendvEXT(texunit: GLenum, coord: GLenum, pname: GLenum, params: *const GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexGenfEXT(texunit: GLenum, coord: GLenum, pname: GLenum, param: GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexGenfvEXT(texunit: GLenum, coord: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexGeniEXT(texunit: GLenum, coord: GLenum, pname: GLenum, param: GLint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn MultiTexGenivEXT(texunit: GLenum, coord: GLenum, pname: GLenum, params: *const GLint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetMultiTexEnvfvEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetMultiTexEnvivEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetMultiTexGendvEXT(texunit: GLenum, coord: GLenum, pname: GLenum, params: *mut GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetMultiTexGenfvEXT(texunit: GLenum, coord: GLenum, pname: GLenum, params: *mut GLfloat);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetMultiTexGenivEXT(texunit: GLenum, coord: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access]
  fn MultiTexParameteriEXT(texunit: GLenum, target: GLenum, pname: GLenum, param: GLint);
  [GL_EXT_direct_state_access]
  fn MultiTexParameterivEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *const GLint);
  [GL_EXT_direct_state_access]
  fn MultiTexParameterfEXT(texunit: GLenum, target: GLenum, pname: GLenum, param: GLfloat);
  [GL_EXT_direct_state_access]
  fn MultiTexParameterfvEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *const GLfloat);
  [GL_EXT_direct_state_access] fn MultiTexImage1DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLint,
    width: GLsizei, border: GLint, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn MultiTexImage2DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLint,
    width: GLsizei, height: GLsizei, border: GLint, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn MultiTexSubImage1DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    width: GLsizei, format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn MultiTexSubImage2DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum,
    pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CopyMultiTexImage1DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLenum,
    x: GLint, y: GLint, width: GLsizei, border: GLint,
  );
  [GL_EXT_direct_state_access] fn CopyMultiTexImage2DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLenum,
    x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint,
  );
  [GL_EXT_direct_state_access] fn CopyMultiTexSubImage1DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint, x: GLint,
    y: GLint, width: GLsizei,
  );
  [GL_EXT_direct_state_access] fn CopyMultiTexSubImage2DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei,
  );
  [GL_EXT_direct_state_access] fn GetMultiTexImageEXT(
    texunit: GLenum, target: GLenum, level: GLint, format: GLenum, ty: GLenum,
    pixels: *mut c_void,
  );
  [GL_EXT_direct_state_access] fn GetMultiTexParameterfvEXT(
    texunit: GLenum, target: GLenum, pname: GLenum, params: *mut GLfloat,
  );
  [GL_EXT_direct_state_access]
  fn GetMultiTexParameterivEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access] fn GetMultiTexLevelParameterfvEXT(
    texunit: GLenum, target: GLenum, level: GLint, pname: GLenum,
    params: *mut GLfloat,
  );
  [GL_EXT_direct_state_access] fn GetMultiTexLevelParameterivEXT(
    texunit: GLenum, target: GLenum, level: GLint, pname: GLenum,
    params: *mut GLint,
  );
  [GL_EXT_direct_state_access] fn MultiTexImage3DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLint,
    width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint,
    format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn MultiTexSubImage3DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei,
    depth: GLsizei, format: GLenum, ty: GLenum, pixels: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CopyMultiTexSubImage3DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei,
    height: GLsizei,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn EnableClientStateIndexedEXT(array: GLenum, index: GLuint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn DisableClientStateIndexedEXT(array: GLenum, index: GLuint);
  [GL_EXT_direct_state_access]
  fn GetFloatIndexedvEXT(target: GLenum, index: GLuint, data: *mut GLfloat);
  [GL_EXT_direct_state_access]
  fn GetDoubleIndexedvEXT(target: GLenum, index: GLuint, data: *mut GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetPointerIndexedvEXT(target: GLenum, index: GLuint, data: *mut *mut c_void);
  [GL_EXT_direct_state_access] fn EnableIndexedEXT(target: GLenum, index: GLuint);
  [GL_EXT_direct_state_access] fn DisableIndexedEXT(target: GLenum, index: GLuint);
  [GL_EXT_direct_state_access] fn IsEnabledIndexedEXT(target: GLenum, index: GLuint) -> GLboolean;
  [GL_EXT_direct_state_access]
  fn GetIntegerIndexedvEXT(target: GLenum, index: GLuint, data: *mut GLint);
  [GL_EXT_direct_state_access]
  fn GetBooleanIndexedvEXT(target: GLenum, index: GLuint, data: *mut GLboolean);
  [GL_EXT_direct_state_access] fn CompressedTextureImage3DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLenum,
    width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint,
    image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedTextureImage2DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLenum,
    width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei,
    data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedTextureImage1DEXT(
    texture: GLuint, target: GLenum, level: GLint, internalformat: GLenum,
    width: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedTextureSubImage3DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei,
    depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedTextureSubImage2DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum,
    image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedTextureSubImage1DEXT(
    texture: GLuint, target: GLenum, level: GLint, xoffset: GLint,
    width: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access]
  fn GetCompressedTextureImageEXT(texture: GLuint, target: GLenum, level: GLint, img: *mut c_void);
  [GL_EXT_direct_state_access] fn CompressedMultiTexImage3DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLenum,
    width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint,
    image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedMultiTexImage2DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLenum,
    width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei,
    data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedMultiTexImage1DEXT(
    texunit: GLenum, target: GLenum, level: GLint, internalformat: GLenum,
    width: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedMultiTexSubImage3DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei,
    depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedMultiTexSubImage2DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum,
    image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access] fn CompressedMultiTexSubImage1DEXT(
    texunit: GLenum, target: GLenum, level: GLint, xoffset: GLint,
    width: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void,
  );
  [GL_EXT_direct_state_access]
  fn GetCompressedMultiTexImageEXT(texunit: GLenum, target: GLenum, level: GLint, img: *mut c_void);
  [GL_EXT_direct_state_access @ Compatibility] fn NamedProgramStringEXT(
    program: GLuint, target: GLenum, format: GLenum, len: GLsizei,
    string: *const c_void,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn NamedProgramLocalParameter4dEXT(
    program: GLuint, target: GLenum, index: GLuint, x: GLdouble, y: GLdouble,
    z: GLdouble, w: GLdouble,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn NamedProgramLocalParameter4dvEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *const GLdouble,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn NamedProgramLocalParameter4fEXT(
    program: GLuint, target: GLenum, index: GLuint, x: GLfloat, y: GLfloat,
    z: GLfloat, w: GLfloat,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn NamedProgramLocalParameter4fvEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *const GLfloat,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetNamedProgramLocalParameterdvEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *mut GLdouble,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetNamedProgramLocalParameterfvEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *mut GLfloat,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetNamedProgramivEXT(program: GLuint, target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetNamedProgramStringEXT(program: GLuint, target: GLenum, pname: GLenum, string: *mut c_void);
  [GL_EXT_direct_state_access @ Compatibility]
  fn NamedProgramLocalParameters4fvEXT(
    program: GLuint, target: GLenum, index: GLuint, count: GLsizei,
    params: *const GLfloat,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn NamedProgramLocalParameterI4iEXT(
    program: GLuint, target: GLenum, index: GLuint, x: GLint, y: GLint,
    z: GLint, w: GLint,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn NamedProgramLocalParameterI4ivEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *const GLint,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn NamedProgramLocalParametersI4ivEXT(
    program: GLuint, target: GLenum, index: GLuint, count: GLsizei,
    params: *const GLint,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn NamedProgramLocalParameterI4uiEXT(
    program: GLuint, target: GLenum, index: GLuint, x: GLuint, y: GLuint,
    z: GLuint, w: GLuint,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn NamedProgramLocalParameterI4uivEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *const GLuint,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn NamedProgramLocalParametersI4uivEXT(
    program: GLuint, target: GLenum, index: GLuint, count: GLsizei,
    params: *const GLuint,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn GetNamedProgramLocalParameterIivEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *mut GLint,
  );
  [GL_EXT_direct_state_access + GL_NV_gpu_program4 @ Compatibility]
  fn GetNamedProgramLocalParameterIuivEXT(
    program: GLuint, target: GLenum, index: GLuint, params: *mut GLuint,
  );
  [GL_EXT_direct_state_access]
  fn TextureParameterIivEXT(texture: GLuint, target: GLenum, pname: GLenum, params: *const GLint);
  [GL_EXT_direct_state_access]
  fn TextureParameterIuivEXT(texture: GLuint, target: GLenum, pname: GLenum, params: *const GLuint);
  [GL_EXT_direct_state_access]
  fn GetTextureParameterIivEXT(texture: GLuint, target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access] fn GetTextureParameterIuivEXT(
    texture: GLuint, target: GLenum, pname: GLenum, params: *mut GLuint,
  );
  [GL_EXT_direct_state_access]
  fn MultiTexParameterIivEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *const GLint);
  [GL_EXT_direct_state_access] fn MultiTexParameterIuivEXT(
    texunit: GLenum, target: GLenum, pname: GLenum, params: *const GLuint,
  );
  [GL_EXT_direct_state_access]
  fn GetMultiTexParameterIivEXT(texunit: GLenum, target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access] fn GetMultiTexParameterIuivEXT(
    texunit: GLenum, target: GLenum, pname: GLenum, params: *mut GLuint,
  );
  [GL_EXT_direct_state_access]
  fn ProgramUniform1fEXT(program: GLuint, location: GLint, v0: GLfloat);
  [GL_EXT_direct_state_access]
  fn ProgramUniform2fEXT(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
  [GL_EXT_direct_state_access]
  fn ProgramUniform3fEXT(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
  [GL_EXT_direct_state_access] fn ProgramUniform4fEXT(
    program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat,
    v3: GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniform1iEXT(program: GLuint, location: GLint, v0: GLint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform2iEXT(program: GLuint, location: GLint, v0: GLint, v1: GLint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform3iEXT(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
  [GL_EXT_direct_state_access] fn ProgramUniform4iEXT(
    program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint,
    v3: GLint,
  );
  [GL_EXT_direct_state_access]
  fn ProgramUniform1fvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_EXT_direct_state_access]
  fn ProgramUniform2fvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_EXT_direct_state_access]
  fn ProgramUniform3fvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_EXT_direct_state_access]
  fn ProgramUniform4fvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
  [GL_EXT_direct_state_access]
  fn ProgramUniform1ivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform2ivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform3ivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform4ivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform1uiEXT(program: GLuint, location: GLint, v0: GLuint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform2uiEXT(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform3uiEXT(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
  [GL_EXT_direct_state_access] fn ProgramUniform4uiEXT(
    program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint,
    v3: GLuint,
  );
  [GL_EXT_direct_state_access]
  fn ProgramUniform1uivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform2uivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform3uivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_EXT_direct_state_access]
  fn ProgramUniform4uivEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix2fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix3fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix4fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix2x3fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix3x2fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix2x4fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix4x2fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix3x4fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access] fn ProgramUniformMatrix4x3fvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLfloat,
  );
  [GL_EXT_direct_state_access]
  fn NamedBufferDataEXT(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
  [GL_EXT_direct_state_access]
  fn NamedBufferSubDataEXT(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
  [GL_EXT_direct_state_access] fn MapNamedBufferEXT(buffer: GLuint, access: GLenum) -> *mut c_void;
  [GL_EXT_direct_state_access] fn UnmapNamedBufferEXT(buffer: GLuint) -> GLboolean;
  [GL_EXT_direct_state_access]
  fn GetNamedBufferParameterivEXT(buffer: GLuint, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access]
  fn GetNamedBufferPointervEXT(buffer: GLuint, pname: GLenum, params: *const *mut c_void);
  [GL_EXT_direct_state_access] fn GetNamedBufferSubDataEXT(
    buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *mut c_void,
  );
  [GL_EXT_direct_state_access]
  fn TextureBufferEXT(texture: GLuint, target: GLenum, internalformat: GLenum, buffer: GLuint);
  [GL_EXT_direct_state_access]
  fn MultiTexBufferEXT(texunit: GLenum, target: GLenum, internalformat: GLenum, buffer: GLuint);
  [GL_EXT_direct_state_access] fn NamedRenderbufferStorageEXT(
    renderbuffer: GLuint, internalformat: GLenum, width: GLsizei,
    height: GLsizei,
  );
  [GL_EXT_direct_state_access]
  fn GetNamedRenderbufferParameterivEXT(renderbuffer: GLuint, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access]
  fn CheckNamedFramebufferStatusEXT(framebuffer: GLuint, target: GLenum) -> GLenum;
  [GL_EXT_direct_state_access] fn NamedFramebufferTexture1DEXT(
    framebuffer: GLuint, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint,
  );
  [GL_EXT_direct_state_access] fn NamedFramebufferTexture2DEXT(
    framebuffer: GLuint, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint,
  );
  [GL_EXT_direct_state_access] fn NamedFramebufferTexture3DEXT(
    framebuffer: GLuint, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint, zoffset: GLint,
  );
  [GL_EXT_direct_state_access] fn NamedFramebufferRenderbufferEXT(
    framebuffer: GLuint, attachment: GLenum, renderbuffertarget: GLenum,
    renderbuffer: GLuint,
  );
  [GL_EXT_direct_state_access] fn GetNamedFramebufferAttachmentParameterivEXT(
    framebuffer: GLuint, attachment: GLenum, pname: GLenum, params: *mut GLint,
  );
  [GL_EXT_direct_state_access] fn GenerateTextureMipmapEXT(texture: GLuint, target: GLenum);
  [GL_EXT_direct_state_access] fn GenerateMultiTexMipmapEXT(texunit: GLenum, target: GLenum);
  [GL_EXT_direct_state_access] fn FramebufferDrawBufferEXT(framebuffer: GLuint, mode: GLenum);
  [GL_EXT_direct_state_access]
  fn FramebufferDrawBuffersEXT(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
  [GL_EXT_direct_state_access] fn FramebufferReadBufferEXT(framebuffer: GLuint, mode: GLenum);
  [GL_EXT_direct_state_access]
  fn GetFramebufferParameterivEXT(framebuffer: GLuint, pname: GLenum, params: *mut GLint);
  [GL_EXT_direct_state_access] fn NamedRenderbufferStorageMultisampleEXT(
    renderbuffer: GLuint, samples: GLsizei, internalformat: GLenum,
    width: GLsizei, height: GLsizei,
  );
  [GL_EXT_direct_state_access + GL_NV_framebuffer_multisample_coverage]
  fn NamedRenderbufferStorageMultisampleCoverageEXT(
    renderbuffer: GLuint, coverage_samples: GLsizei, color_samples: GLsizei,
    internalformat: GLenum, width: GLsizei, height: GLsizei,
  );
  [GL_EXT_direct_state_access] fn NamedFramebufferTextureEXT(
    framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint,
  );
  [GL_EXT_direct_state_access] fn NamedFramebufferTextureLayerEXT(
    framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint,
    layer: GLint,
  );
  [GL_EXT_direct_state_access] fn NamedFramebufferTextureFaceEXT(
    framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint,
    face: GLenum,
  );
  [GL_EXT_direct_state_access]
  fn TextureRenderbufferEXT(texture: GLuint, target: GLenum, renderbuffer: GLuint);
  [GL_EXT_direct_state_access]
  fn MultiTexRenderbufferEXT(texunit: GLenum, target: GLenum, renderbuffer: GLuint);
  [GL_EXT_direct_state_access @ Compatibility] fn VertexArrayVertexOffsetEXT(
    vaobj: GLuint, buffer: GLuint, size: GLint, ty: GLenum, stride: GLsizei,
    offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility] fn VertexArrayColorOffsetEXT(
    vaobj: GLuint, buffer: GLuint, size: GLint, ty: GLenum, stride: GLsizei,
    offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn VertexArrayEdgeFlagOffsetEXT(vaobj: GLuint, buffer: GLuint, stride: GLsizei, offset: GLintptr);
  [GL_EXT_direct_state_access @ Compatibility] fn VertexArrayIndexOffsetEXT(
    vaobj: GLuint, buffer: GLuint, ty: GLenum, stride: GLsizei,
    offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility] fn VertexArrayNormalOffsetEXT(
    vaobj: GLuint, buffer: GLuint, ty: GLenum, stride: GLsizei,
    offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility] fn VertexArrayTexCoordOffsetEXT(
    vaobj: GLuint, buffer: GLuint, size: GLint, ty: GLenum, stride: GLsizei,
    offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn VertexArrayMultiTexCoordOffsetEXT(
    vaobj: GLuint, buffer: GLuint, texunit: GLenum, size: GLint, ty: GLenum,
    stride: GLsizei, offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility] fn VertexArrayFogCoordOffsetEXT(
    vaobj: GLuint, buffer: GLuint, ty: GLenum, stride: GLsizei,
    offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn VertexArraySecondaryColorOffsetEXT(
    vaobj: GLuint, buffer: GLuint, size: GLint, ty: GLenum, stride: GLsizei,
    offset: GLintptr,
  );
  [GL_EXT_direct_state_access] fn VertexArrayVertexAttribOffsetEXT(
    vaobj: GLuint, buffer: GLuint, index: GLuint, size: GLint, ty: GLenum,
    normalized: GLboolean, stride: GLsizei, offset: GLintptr,
  );
  [GL_EXT_direct_state_access] fn VertexArrayVertexAttribIOffsetEXT(
    vaobj: GLuint, buffer: GLuint, index: GLuint, size: GLint, ty: GLenum,
    stride: GLsizei, offset: GLintptr,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn EnableVertexArrayEXT(vaobj: GLuint, array: GLenum);
  [GL_EXT_direct_state_access @ Compatibility]
  fn DisableVertexArrayEXT(vaobj: GLuint, array: GLenum);
  [GL_EXT_direct_state_access] fn EnableVertexArrayAttribEXT(vaobj: GLuint, index: GLuint);
  [GL_EXT_direct_state_access] fn DisableVertexArrayAttribEXT(vaobj: GLuint, index: GLuint);
  [GL_EXT_direct_state_access]
  fn GetVertexArrayIntegervEXT(vaobj: GLuint, pname: GLenum, param: *mut GLint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetVertexArrayPointervEXT(vaobj: GLuint, pname: GLenum, param: *mut *mut c_void);
  [GL_EXT_direct_state_access]
  fn GetVertexArrayIntegeri_vEXT(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint);
  [GL_EXT_direct_state_access @ Compatibility] fn GetVertexArrayPointeri_vEXT(
    vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut *mut c_void,
  );
  [GL_EXT_direct_state_access] fn MapNamedBufferRangeEXT(
    buffer: GLuint, offset: GLintptr, length: GLsizeiptr, access: GLbitfield,
  ) -> *mut c_void;
  [GL_EXT_direct_state_access]
  fn FlushMappedNamedBufferRangeEXT(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
  [GL_EXT_direct_state_access] fn NamedCopyBufferSubDataEXT(
    read_buffer: GLuint, write_buffer: GLuint, read_offset: GLintptr,
    write_offset: GLintptr, size: GLsizeiptr,
  );
  [GL_EXT_direct_state_access @ Compatibility]
  fn EnableClientStateiEXT(array: GLenum, index: GLuint);
  [GL_EXT_direct_state_access @ Compatibility]
  fn DisableClientStateiEXT(array: GLenum, index: GLuint);
  [GL_EXT_direct_state_access]
  fn GetFloati_vEXT(pname: GLenum, index: GLuint, params: *mut GLfloat);
  [GL_EXT_direct_state_access]
  fn GetDoublei_vEXT(pname: GLenum, index: GLuint, params: *mut GLdouble);
  [GL_EXT_direct_state_access @ Compatibility]
  fn GetPointeri_vEXT(pname: GLenum, index: GLuint, params: *mut *mut c_void);
  [GL_EXT_direct_state_access + GL_ARB_buffer_storage] fn NamedBufferStorageEXT(
    buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield,
  );
  [GL_EXT_direct_state_access + GL_ARB_clear_buffer_object]
  fn ClearNamedBufferDataEXT(
    buffer: GLuint, internalformat: GLenum, format: GLenum, ty: GLenum,
    data: *const c_void,
  );
  [GL_EXT_direct_state_access + GL_ARB_clear_buffer_object]
  fn ClearNamedBufferSubDataEXT(
    buffer: GLuint, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr,
    format: GLenum, ty: GLenum, data: *const c_void,
  );
  [GL_EXT_direct_state_access + GL_ARB_framebuffer_no_attachments]
  fn NamedFramebufferParameteriEXT(framebuffer: GLuint, pname: GLenum, param: GLint);
  [GL_EXT_direct_state_access + GL_ARB_framebuffer_no_attachments]
  fn GetNamedFramebufferParameterivEXT(framebuffer: GLuint, pname: GLenum, param: *mut GLint);
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniform1dEXT(program: GLuint, location: GLint, v0: GLdouble);
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniform2dEXT(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble);
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64] fn ProgramUniform3dEXT(
    program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64] fn ProgramUniform4dEXT(
    program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble,
    v3: GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniform1dvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniform2dvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniform3dvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniform4dvEXT(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix2dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix3dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix4dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix2x3dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix2x4dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix3x2dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix3x4dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix4x2dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_gpu_shader_fp64]
  fn ProgramUniformMatrix4x3dvEXT(
    program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean,
    value: *const GLdouble,
  );
  [GL_EXT_direct_state_access + GL_ARB_texture_buffer_range]
  fn TextureBufferRangeEXT(
    texture: GLuint, target: GLenum, internalformat: GLenum, buffer: GLuint,
    offset: GLintptr, size: GLsizeiptr,
  );
  [GL_EXT_direct_state_access + GL_ARB_texture_storage] fn TextureStorage1DEXT(
    texture: GLuint, target: GLenum, levels: GLsizei, internalformat: GLenum,
    width: GLsizei,
  );
  [GL_EXT_direct_state_access + GL_ARB_texture_storage] fn TextureStorage2DEXT(
    texture: GLuint, target: GLenum, levels: GLsizei, internalformat: GLenum,
    width: GLsizei, height: GLsizei,
  );
  [GL_EXT_direct_state_access + GL_ARB_texture_storage] fn TextureStorage3DEXT(
    texture: GLuint, target: GLenum, levels: GLsizei, internalformat: GLenum,
    width: GLsizei, height: GLsizei, depth: GLsizei,
  );
  [GL_EXT_direct_state_access + GL_ARB_texture_storage_multisample]
  fn TextureStorage2DMultisampleEXT(
    texture: GLuint, target: GLenum, samples: GLsizei, internalformat: GLenum,
    width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean,
  );
  [GL_EXT_direct_state_access + GL_ARB_texture_storage_multisample]
  fn TextureStorage3DMultisampleEXT(
    texture: GLuint, target: GLenum, samples: GLsizei, internalformat: GLenum,
    width: GLsizei, height: GLsizei, depth: GLsizei,
    fixedsamplelocations: GLboolean,
  );
  [GL_EXT_direct_state_access + GL_ARB_vertex_attrib_binding]
  fn VertexArrayBindVertexBufferEXT(
    vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: GLintptr,
    stride: GLsizei,
  );
  [GL_EXT_direct_state_access + GL_ARB_vertex_attrib_binding]
  fn VertexArrayVertexAttribFormatEXT(
    vaobj: GLuint, attribindex: GLuint, size: GLint, ty: GLenum,
    normalized: GLboolean, relativeoffset: GLuint,
  );
  [GL_EXT_direct_state_access + GL_ARB_vertex_attrib_binding]
  fn VertexArrayVertexAttribIFormatEXT(
    vaobj: GLuint, attribindex: GLuint, size: GLint, ty: GLenum,
    relativeoffset: GLuint,
  );
  [GL_EXT_direct_state_access + GL_ARB_vertex_attrib_binding]
  fn VertexArrayVertexAttribLFormatEXT(
    vaobj: GLuint, attribindex: GLuint, size: GLint, ty: GLenum,
    relativeoffset: GLuint,
  );
  [GL_EXT_direct_state_access + GL_ARB_vertex_attrib_binding]
  fn VertexArrayVertexAttribBindingEXT(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
  [GL_EXT_direct_state_access + GL_ARB_vertex_attrib_binding]
  fn VertexArrayVertexBindingDivisorEXT(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);
  [GL_EXT_direct_state_access + GL_ARB_vertex_attrib_64bit]
  fn VertexArrayVertexAttribLOffsetEXT(
    vaobj: GLuint, buffer: GLuint, index: GLuint, size: GLint, ty: GLenum,
    stride: GLsizei, offset: GLintptr,
  );
  [GL_EXT_direct_state_access + GL_ARB_sparse_texture]
  fn TexturePageCommitmentEXT(
    texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
    zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
    commit: GLboolean,
  );
  [GL_EXT_direct_state_access + GL_ARB_instanced_arrays]
  fn VertexArrayVertexAttribDivisorEXT(vaobj: GLuint, index: GLuint, divisor: GLuint);

  // GL_EXT_framebuffer_object

  [GL_EXT_framebuffer_object] fn IsRenderbufferEXT(renderbuffer: GLuint) -> GLboolean;
  [GL_EXT_framebuffer_object] fn BindRenderbufferEXT(target: GLenum, renderbuffer: GLuint);
  [GL_EXT_framebuffer_object] fn DeleteRenderbuffersEXT(n: GLsizei, renderbuffers: *const GLuint);
  [GL_EXT_framebuffer_object] fn GenRenderbuffersEXT(n: GLsizei, renderbuffers: *mut GLuint);
  [GL_EXT_framebuffer_object] fn RenderbufferStorageEXT(
    target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei,
  );
  [GL_EXT_framebuffer_object]
  fn GetRenderbufferParameterivEXT(target: GLenum, pname: GLenum, params: *mut GLint);
  [GL_EXT_framebuffer_object] fn IsFramebufferEXT(framebuffer: GLuint) -> GLboolean;
  [GL_EXT_framebuffer_object] fn BindFramebufferEXT(target: GLenum, framebuffer: GLuint);
  [GL_EXT_framebuffer_object] fn DeleteFramebuffersEXT(n: GLsizei, framebuffers: *const GLuint);
  [GL_EXT_framebuffer_object] fn GenFramebuffersEXT(n: GLsizei, framebuffers: *mut GLuint);
  [GL_EXT_framebuffer_object] fn CheckFramebufferStatusEXT(target: GLenum) -> GLenum;
  [GL_EXT_framebuffer_object] fn FramebufferTexture1DEXT(
    target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint,
  );
  [GL_EXT_framebuffer_object] fn FramebufferTexture2DEXT(
    target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint,
  );
  [GL_EXT_framebuffer_object] fn FramebufferTexture3DEXT(
    target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint,
    level: GLint, zoffset: GLint,
  );
  [GL_EXT_framebuffer_object] fn FramebufferRenderbufferEXT(
    target: GLenum, attachment: GLenum, renderbuffertarget: GLenum,
    renderbuffer: GLuint,
  );
  [GL_EXT_framebuffer_object] fn GetFramebufferAttachmentParameterivEXT(
    target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint,
  );
  [GL_EXT_framebuffer_object] fn GenerateMipmapEXT(target: GLenum);

  // GL_KHR_debug, the suffixed names GL ES contexts use

  [GL_KHR_debug @ Embedded] fn DebugMessageControlKHR(
    source: GLenum, ty: GLenum, severity: GLenum, count: GLsizei,
    ids: *const GLuint, enabled: GLboolean,
  );
  [GL_KHR_debug @ Embedded] fn DebugMessageInsertKHR(
    source: GLenum, ty: GLenum, id: GLuint, severity: GLenum, length: GLsizei,
    buf: *const GLchar,
  );
  [GL_KHR_debug @ Embedded]
  fn DebugMessageCallbackKHR(callback: GLDEBUGPROC, user_param: *const c_void);
  [GL_KHR_debug @ Embedded] fn GetDebugMessageLogKHR(
    count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum,
    ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei,
    message_log: *mut GLchar,
  ) -> GLuint;
  [GL_KHR_debug @ Embedded]
  fn PushDebugGroupKHR(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
  [GL_KHR_debug @ Embedded] fn PopDebugGroupKHR();
  [GL_KHR_debug @ Embedded]
  fn ObjectLabelKHR(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
  [GL_KHR_debug @ Embedded] fn GetObjectLabelKHR(
    identifier: GLenum, name: GLuint, buf_size: GLsizei, length: *mut GLsizei,
    label: *mut GLchar,
  );
  [GL_KHR_debug @ Embedded]
  fn ObjectPtrLabelKHR(ptr: *const c_void, length: GLsizei, label: *const GLchar);
  [GL_KHR_debug @ Embedded] fn GetObjectPtrLabelKHR(
    ptr: *const c_void, buf_size: GLsizei, length: *mut GLsizei,
    label: *mut GLchar,
  );
  [GL_KHR_debug @ Embedded] fn GetPointervKHR(pname: GLenum, params: *const *mut c_void);

  // GL_NV_bindless_texture

  [GL_NV_bindless_texture] fn GetTextureHandleNV(texture: GLuint) -> GLuint64;
  [GL_NV_bindless_texture]
  fn GetTextureSamplerHandleNV(texture: GLuint, sampler: GLuint) -> GLuint64;
  [GL_NV_bindless_texture] fn MakeTextureHandleResidentNV(handle: GLuint64);
  [GL_NV_bindless_texture] fn MakeTextureHandleNonResidentNV(handle: GLuint64);
  [GL_NV_bindless_texture] fn GetImageHandleNV(
    texture: GLuint, level: GLint, layered: GLboolean, layer: GLint,
    format: GLenum,
  ) -> GLuint64;
  [GL_NV_bindless_texture] fn MakeImageHandleResidentNV(handle: GLuint64, access: GLenum);
  [GL_NV_bindless_texture] fn MakeImageHandleNonResidentNV(handle: GLuint64);
  [GL_NV_bindless_texture] fn UniformHandleui64NV(location: GLint, value: GLuint64);
  [GL_NV_bindless_texture]
  fn UniformHandleui64vNV(location: GLint, count: GLsizei, value: *const GLuint64);
  [GL_NV_bindless_texture]
  fn ProgramUniformHandleui64NV(program: GLuint, location: GLint, value: GLuint64);
  [GL_NV_bindless_texture] fn ProgramUniformHandleui64vNV(
    program: GLuint, location: GLint, count: GLsizei, values: *const GLuint64,
  );
  [GL_NV_bindless_texture] fn IsTextureHandleResidentNV(handle: GLuint64) -> GLboolean;
  [GL_NV_bindless_texture] fn IsImageHandleResidentNV(handle: GLuint64) -> GLboolean;

  // GL_NV_conservative_raster

  [GL_NV_conservative_raster] fn SubpixelPrecisionBiasNV(xbits: GLuint, ybits: GLuint);

  // GL_NV_primitive_restart

  [GL_NV_primitive_restart] fn PrimitiveRestartNV();
  [GL_NV_primitive_restart] fn PrimitiveRestartIndexNV(index: GLuint);

  // GL_NV_shader_buffer_load

  [GL_NV_shader_buffer_load] fn MakeBufferResidentNV(target: GLenum, access: GLenum);
  [GL_NV_shader_buffer_load] fn MakeBufferNonResidentNV(target: GLenum);
  [GL_NV_shader_buffer_load] fn IsBufferResidentNV(target: GLenum) -> GLboolean;
  [GL_NV_shader_buffer_load] fn MakeNamedBufferResidentNV(buffer: GLuint, access: GLenum);
  [GL_NV_shader_buffer_load] fn MakeNamedBufferNonResidentNV(buffer: GLuint);
  [GL_NV_shader_buffer_load] fn IsNamedBufferResidentNV(buffer: GLuint) -> GLboolean;
  [GL_NV_shader_buffer_load]
  fn GetBufferParameterui64vNV(target: GLenum, pname: GLenum, params: *mut GLuint64EXT);
  [GL_NV_shader_buffer_load]
  fn GetNamedBufferParameterui64vNV(buffer: GLuint, pname: GLenum, params: *mut GLuint64EXT);
  [GL_NV_shader_buffer_load] fn GetIntegerui64vNV(value: GLenum, result: *mut GLuint64EXT);
  [GL_NV_shader_buffer_load] fn Uniformui64NV(location: GLint, value: GLuint64EXT);
  [GL_NV_shader_buffer_load]
  fn Uniformui64vNV(location: GLint, count: GLsizei, value: *const GLuint64EXT);
  [GL_NV_shader_buffer_load]
  fn GetUniformui64vNV(program: GLuint, location: GLint, params: *mut GLuint64EXT);
  [GL_NV_shader_buffer_load]
  fn ProgramUniformui64NV(program: GLuint, location: GLint, value: GLuint64EXT);
  [GL_NV_shader_buffer_load] fn ProgramUniformui64vNV(
    program: GLuint, location: GLint, count: GLsizei, value: *const GLuint64EXT,
  );
}
