//! Version and extension flags.
//!
//! Each [`Feature`] is either a GL version or an extension. After a load the
//! [`Features`] table holds `true` for everything the current context
//! provides.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use crate::{
  extensions::ExtensionSet,
  version::{ApiKind, GlVersion},
};

macro_rules! gl_features {
  (
    desktop { $($dv:ident => ($dmaj:literal, $dmin:literal),)* }
    es { $($ev:ident => ($emaj:literal, $emin:literal),)* }
    extensions { $($ext:ident,)* }
  ) => {
    /// A GL version or extension that a context may provide.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Feature {
      $($dv,)*
      $($ev,)*
      $($ext,)*
    }
    impl Feature {
      /// Every feature, versions first.
      pub const ALL: &'static [Feature] = &[
        $(Feature::$dv,)*
        $(Feature::$ev,)*
        $(Feature::$ext,)*
      ];

      /// The registry name, such as `GL_VERSION_3_3` or `GL_KHR_debug`.
      #[inline]
      #[must_use]
      pub const fn name(self) -> &'static str {
        match self {
          $(Feature::$dv => stringify!($dv),)*
          $(Feature::$ev => stringify!($ev),)*
          $(Feature::$ext => stringify!($ext),)*
        }
      }

      /// The version this feature stands for, or `None` for extensions.
      #[inline]
      #[must_use]
      pub const fn version(self) -> Option<GlVersion> {
        match self {
          $(Feature::$dv => Some(GlVersion::desktop($dmaj, $dmin)),)*
          $(Feature::$ev => Some(GlVersion::es($emaj, $emin)),)*
          _ => None,
        }
      }

      /// Looks a feature up by its registry name.
      #[inline]
      #[must_use]
      pub fn from_name(name: &str) -> Option<Self> {
        match name {
          $(stringify!($dv) => Some(Feature::$dv),)*
          $(stringify!($ev) => Some(Feature::$ev),)*
          $(stringify!($ext) => Some(Feature::$ext),)*
          _ => None,
        }
      }
    }

    /// One flag per [`Feature`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Features {
      $(pub $dv: bool,)*
      $(pub $ev: bool,)*
      $(pub $ext: bool,)*
    }
    impl Features {
      /// All flags cleared.
      pub const NONE: Self = Self {
        $($dv: false,)*
        $($ev: false,)*
        $($ext: false,)*
      };

      #[inline]
      #[must_use]
      pub const fn has(&self, feature: Feature) -> bool {
        match feature {
          $(Feature::$dv => self.$dv,)*
          $(Feature::$ev => self.$ev,)*
          $(Feature::$ext => self.$ext,)*
        }
      }

      #[inline]
      fn set(&mut self, feature: Feature, value: bool) {
        match feature {
          $(Feature::$dv => self.$dv = value,)*
          $(Feature::$ev => self.$ev = value,)*
          $(Feature::$ext => self.$ext = value,)*
        }
      }
    }
  };
}

gl_features! {
  desktop {
    GL_VERSION_1_0 => (1, 0),
    GL_VERSION_1_1 => (1, 1),
    GL_VERSION_1_2 => (1, 2),
    GL_VERSION_1_3 => (1, 3),
    GL_VERSION_1_4 => (1, 4),
    GL_VERSION_1_5 => (1, 5),
    GL_VERSION_2_0 => (2, 0),
    GL_VERSION_2_1 => (2, 1),
    GL_VERSION_3_0 => (3, 0),
    GL_VERSION_3_1 => (3, 1),
    GL_VERSION_3_2 => (3, 2),
    GL_VERSION_3_3 => (3, 3),
    GL_VERSION_4_0 => (4, 0),
    GL_VERSION_4_1 => (4, 1),
    GL_VERSION_4_2 => (4, 2),
    GL_VERSION_4_3 => (4, 3),
    GL_VERSION_4_4 => (4, 4),
    GL_VERSION_4_5 => (4, 5),
    GL_VERSION_4_6 => (4, 6),
  }
  es {
    GL_ES_VERSION_2_0 => (2, 0),
    GL_ES_VERSION_3_0 => (3, 0),
    GL_ES_VERSION_3_1 => (3, 1),
    GL_ES_VERSION_3_2 => (3, 2),
  }
  extensions {
    GL_AMD_shader_trinary_minmax,
    GL_APPLE_vertex_array_object,
    GL_ARB_bindless_texture,
    GL_ARB_buffer_storage,
    GL_ARB_clear_buffer_object,
    GL_ARB_clear_texture,
    GL_ARB_clip_control,
    GL_ARB_compatibility,
    GL_ARB_compute_shader,
    GL_ARB_copy_image,
    GL_ARB_debug_output,
    GL_ARB_direct_state_access,
    GL_ARB_draw_instanced,
    GL_ARB_fragment_shader_interlock,
    GL_ARB_framebuffer_no_attachments,
    GL_ARB_framebuffer_object,
    GL_ARB_get_program_binary,
    GL_ARB_gl_spirv,
    GL_ARB_gpu_shader_fp64,
    GL_ARB_gpu_shader_int64,
    GL_ARB_indirect_parameters,
    GL_ARB_instanced_arrays,
    GL_ARB_multi_bind,
    GL_ARB_multi_draw_indirect,
    GL_ARB_program_interface_query,
    GL_ARB_sampler_objects,
    GL_ARB_seamless_cube_map,
    GL_ARB_separate_shader_objects,
    GL_ARB_shader_atomic_counters,
    GL_ARB_shader_draw_parameters,
    GL_ARB_shader_image_load_store,
    GL_ARB_shader_storage_buffer_object,
    GL_ARB_shading_language_420pack,
    GL_ARB_sparse_texture,
    GL_ARB_sync,
    GL_ARB_tessellation_shader,
    GL_ARB_texture_barrier,
    GL_ARB_texture_buffer_range,
    GL_ARB_texture_float,
    GL_ARB_texture_storage,
    GL_ARB_texture_storage_multisample,
    GL_ARB_texture_view,
    GL_ARB_timer_query,
    GL_ARB_uniform_buffer_object,
    GL_ARB_vertex_array_object,
    GL_ARB_vertex_attrib_64bit,
    GL_ARB_vertex_attrib_binding,
    GL_EXT_debug_label,
    GL_EXT_direct_state_access,
    GL_EXT_framebuffer_object,
    GL_EXT_texture_filter_anisotropic,
    GL_EXT_texture_sRGB_decode,
    GL_KHR_debug,
    GL_NV_bindless_texture,
    GL_NV_conservative_raster,
    GL_NV_fragment_shader_barycentric,
    GL_NV_framebuffer_multisample_coverage,
    GL_NV_gpu_program4,
    GL_NV_primitive_restart,
    GL_NV_shader_atomic_float,
    GL_NV_shader_buffer_load,
  }
}

impl Features {
  /// Works out the flags for a context of `version` advertising `extensions`.
  ///
  /// Version flags are set for the context's own version and every earlier
  /// version of the same API. Extension flags are set when the name appears
  /// in `extensions`.
  #[inline]
  #[must_use]
  pub fn detect(version: GlVersion, extensions: &ExtensionSet) -> Self {
    let mut features = Self::NONE;
    for &feature in Feature::ALL {
      let present = match feature.version() {
        Some(v) => version.satisfies(v),
        None => extensions.contains(feature.name()),
      };
      features.set(feature, present);
    }
    features
  }

  /// The features that are set.
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
    Feature::ALL.iter().copied().filter(|f| self.has(*f))
  }

  /// The newest version flag that is set, if any.
  #[inline]
  #[must_use]
  pub fn newest_version(&self, api: ApiKind) -> Option<GlVersion> {
    self
      .iter()
      .filter_map(Feature::version)
      .filter(|v| v.api == api)
      .last()
  }
}
impl Default for Features {
  #[inline]
  fn default() -> Self {
    Self::NONE
  }
}
