//! Command lists from the OpenGL registry (`gl.xml`), grouped by the
//! `<feature>` or `<extension>` that requires them. The table is checked
//! against these in both directions.
//!
//! A command the registry requires again in a later version (`glGetPointerv`
//! comes back in 4.3 with the debug output) is only listed under the first.

use crate::{
  extensions::ExtensionSet,
  features::{Feature, Features},
  functions::{Scope, Symbol, SYMBOLS},
  version::{ContextProfile, GlVersion},
};

/// The commands one desktop version adds.
struct VersionCommands {
  feature: Feature,
  core: &'static [&'static str],
  /// The ones a core profile context doesn't have.
  compatibility: &'static [&'static str],
}

/// The commands an extension adds, or the part of them that needs `requires`
/// as well or only applies in `scope`.
struct ExtensionCommands {
  feature: Feature,
  requires: Option<Feature>,
  scope: Option<Scope>,
  commands: &'static [&'static str],
}

static DESKTOP: &[VersionCommands] = &[
  VersionCommands {
    feature: Feature::GL_VERSION_1_0,
    core: &[
      "glCullFace", "glFrontFace", "glHint", "glLineWidth", "glPointSize",
      "glPolygonMode", "glScissor", "glTexParameterf", "glTexParameterfv",
      "glTexParameteri", "glTexParameteriv", "glTexImage1D", "glTexImage2D",
      "glDrawBuffer", "glClear", "glClearColor", "glClearStencil",
      "glClearDepth", "glStencilMask", "glColorMask", "glDepthMask",
      "glDisable", "glEnable", "glFinish", "glFlush", "glBlendFunc",
      "glLogicOp", "glStencilFunc", "glStencilOp", "glDepthFunc",
      "glPixelStoref", "glPixelStorei", "glReadBuffer", "glReadPixels",
      "glGetBooleanv", "glGetDoublev", "glGetError", "glGetFloatv",
      "glGetIntegerv", "glGetString", "glGetTexImage", "glGetTexParameterfv",
      "glGetTexParameteriv", "glGetTexLevelParameterfv",
      "glGetTexLevelParameteriv", "glIsEnabled", "glDepthRange", "glViewport",
    ],
    compatibility: &[
      "glNewList", "glEndList", "glCallList", "glCallLists", "glDeleteLists",
      "glGenLists", "glListBase", "glBegin", "glBitmap", "glColor3b",
      "glColor3bv", "glColor3d", "glColor3dv", "glColor3f", "glColor3fv",
      "glColor3i", "glColor3iv", "glColor3s", "glColor3sv", "glColor3ub",
      "glColor3ubv", "glColor3ui", "glColor3uiv", "glColor3us", "glColor3usv",
      "glColor4b", "glColor4bv", "glColor4d", "glColor4dv", "glColor4f",
      "glColor4fv", "glColor4i", "glColor4iv", "glColor4s", "glColor4sv",
      "glColor4ub", "glColor4ubv", "glColor4ui", "glColor4uiv", "glColor4us",
      "glColor4usv", "glEdgeFlag", "glEdgeFlagv", "glEnd", "glIndexd",
      "glIndexdv", "glIndexf", "glIndexfv", "glIndexi", "glIndexiv", "glIndexs",
      "glIndexsv", "glNormal3b", "glNormal3bv", "glNormal3d", "glNormal3dv",
      "glNormal3f", "glNormal3fv", "glNormal3i", "glNormal3iv", "glNormal3s",
      "glNormal3sv", "glRasterPos2d", "glRasterPos2dv", "glRasterPos2f",
      "glRasterPos2fv", "glRasterPos2i", "glRasterPos2iv", "glRasterPos2s",
      "glRasterPos2sv", "glRasterPos3d", "glRasterPos3dv", "glRasterPos3f",
      "glRasterPos3fv", "glRasterPos3i", "glRasterPos3iv", "glRasterPos3s",
      "glRasterPos3sv", "glRasterPos4d", "glRasterPos4dv", "glRasterPos4f",
      "glRasterPos4fv", "glRasterPos4i", "glRasterPos4iv", "glRasterPos4s",
      "glRasterPos4sv", "glRectd", "glRectdv", "glRectf", "glRectfv", "glRecti",
      "glRectiv", "glRects", "glRectsv", "glTexCoord1d", "glTexCoord1dv",
      "glTexCoord1f", "glTexCoord1fv", "glTexCoord1i", "glTexCoord1iv",
      "glTexCoord1s", "glTexCoord1sv", "glTexCoord2d", "glTexCoord2dv",
      "glTexCoord2f", "glTexCoord2fv", "glTexCoord2i", "glTexCoord2iv",
      "glTexCoord2s", "glTexCoord2sv", "glTexCoord3d", "glTexCoord3dv",
      "glTexCoord3f", "glTexCoord3fv", "glTexCoord3i", "glTexCoord3iv",
      "glTexCoord3s", "glTexCoord3sv", "glTexCoord4d", "glTexCoord4dv",
      "glTexCoord4f", "glTexCoord4fv", "glTexCoord4i", "glTexCoord4iv",
      "glTexCoord4s", "glTexCoord4sv", "glVertex2d", "glVertex2dv",
      "glVertex2f", "glVertex2fv", "glVertex2i", "glVertex2iv", "glVertex2s",
      "glVertex2sv", "glVertex3d", "glVertex3dv", "glVertex3f", "glVertex3fv",
      "glVertex3i", "glVertex3iv", "glVertex3s", "glVertex3sv", "glVertex4d",
      "glVertex4dv", "glVertex4f", "glVertex4fv", "glVertex4i", "glVertex4iv",
      "glVertex4s", "glVertex4sv", "glClipPlane", "glColorMaterial", "glFogf",
      "glFogfv", "glFogi", "glFogiv", "glLightf", "glLightfv", "glLighti",
      "glLightiv", "glLightModelf", "glLightModelfv", "glLightModeli",
      "glLightModeliv", "glLineStipple", "glMaterialf", "glMaterialfv",
      "glMateriali", "glMaterialiv", "glPolygonStipple", "glShadeModel",
      "glTexEnvf", "glTexEnvfv", "glTexEnvi", "glTexEnviv", "glTexGend",
      "glTexGendv", "glTexGenf", "glTexGenfv", "glTexGeni", "glTexGeniv",
      "glFeedbackBuffer", "glSelectBuffer", "glRenderMode", "glInitNames",
      "glLoadName", "glPassThrough", "glPopName", "glPushName", "glClearAccum",
      "glClearIndex", "glIndexMask", "glAccum", "glPopAttrib", "glPushAttrib",
      "glMap1d", "glMap1f", "glMap2d", "glMap2f", "glMapGrid1d", "glMapGrid1f",
      "glMapGrid2d", "glMapGrid2f", "glEvalCoord1d", "glEvalCoord1dv",
      "glEvalCoord1f", "glEvalCoord1fv", "glEvalCoord2d", "glEvalCoord2dv",
      "glEvalCoord2f", "glEvalCoord2fv", "glEvalMesh1", "glEvalPoint1",
      "glEvalMesh2", "glEvalPoint2", "glAlphaFunc", "glPixelZoom",
      "glPixelTransferf", "glPixelTransferi", "glPixelMapfv", "glPixelMapuiv",
      "glPixelMapusv", "glCopyPixels", "glDrawPixels", "glGetClipPlane",
      "glGetLightfv", "glGetLightiv", "glGetMapdv", "glGetMapfv", "glGetMapiv",
      "glGetMaterialfv", "glGetMaterialiv", "glGetPixelMapfv",
      "glGetPixelMapuiv", "glGetPixelMapusv", "glGetPolygonStipple",
      "glGetTexEnvfv", "glGetTexEnviv", "glGetTexGendv", "glGetTexGenfv",
      "glGetTexGeniv", "glIsList", "glFrustum", "glLoadIdentity",
      "glLoadMatrixf", "glLoadMatrixd", "glMatrixMode", "glMultMatrixf",
      "glMultMatrixd", "glOrtho", "glPopMatrix", "glPushMatrix", "glRotated",
      "glRotatef", "glScaled", "glScalef", "glTranslated", "glTranslatef",
    ],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_1_1,
    core: &[
      "glDrawArrays", "glDrawElements", "glGetPointerv", "glPolygonOffset",
      "glCopyTexImage1D", "glCopyTexImage2D", "glCopyTexSubImage1D",
      "glCopyTexSubImage2D", "glTexSubImage1D", "glTexSubImage2D",
      "glBindTexture", "glDeleteTextures", "glGenTextures", "glIsTexture",
    ],
    compatibility: &[
      "glArrayElement", "glColorPointer", "glDisableClientState",
      "glEdgeFlagPointer", "glEnableClientState", "glIndexPointer",
      "glInterleavedArrays", "glNormalPointer", "glTexCoordPointer",
      "glVertexPointer", "glAreTexturesResident", "glPrioritizeTextures",
      "glIndexub", "glIndexubv", "glPopClientAttrib", "glPushClientAttrib",
    ],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_1_2,
    core: &[
      "glDrawRangeElements", "glTexImage3D", "glTexSubImage3D",
      "glCopyTexSubImage3D",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_1_3,
    core: &[
      "glActiveTexture", "glSampleCoverage", "glCompressedTexImage3D",
      "glCompressedTexImage2D", "glCompressedTexImage1D",
      "glCompressedTexSubImage3D", "glCompressedTexSubImage2D",
      "glCompressedTexSubImage1D", "glGetCompressedTexImage",
    ],
    compatibility: &[
      "glClientActiveTexture", "glMultiTexCoord1d", "glMultiTexCoord1dv",
      "glMultiTexCoord1f", "glMultiTexCoord1fv", "glMultiTexCoord1i",
      "glMultiTexCoord1iv", "glMultiTexCoord1s", "glMultiTexCoord1sv",
      "glMultiTexCoord2d", "glMultiTexCoord2dv", "glMultiTexCoord2f",
      "glMultiTexCoord2fv", "glMultiTexCoord2i", "glMultiTexCoord2iv",
      "glMultiTexCoord2s", "glMultiTexCoord2sv", "glMultiTexCoord3d",
      "glMultiTexCoord3dv", "glMultiTexCoord3f", "glMultiTexCoord3fv",
      "glMultiTexCoord3i", "glMultiTexCoord3iv", "glMultiTexCoord3s",
      "glMultiTexCoord3sv", "glMultiTexCoord4d", "glMultiTexCoord4dv",
      "glMultiTexCoord4f", "glMultiTexCoord4fv", "glMultiTexCoord4i",
      "glMultiTexCoord4iv", "glMultiTexCoord4s", "glMultiTexCoord4sv",
      "glLoadTransposeMatrixf", "glLoadTransposeMatrixd",
      "glMultTransposeMatrixf", "glMultTransposeMatrixd",
    ],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_1_4,
    core: &[
      "glBlendFuncSeparate", "glMultiDrawArrays", "glMultiDrawElements",
      "glPointParameterf", "glPointParameterfv", "glPointParameteri",
      "glPointParameteriv", "glBlendColor", "glBlendEquation",
    ],
    compatibility: &[
      "glFogCoordf", "glFogCoordfv", "glFogCoordd", "glFogCoorddv",
      "glFogCoordPointer", "glSecondaryColor3b", "glSecondaryColor3bv",
      "glSecondaryColor3d", "glSecondaryColor3dv", "glSecondaryColor3f",
      "glSecondaryColor3fv", "glSecondaryColor3i", "glSecondaryColor3iv",
      "glSecondaryColor3s", "glSecondaryColor3sv", "glSecondaryColor3ub",
      "glSecondaryColor3ubv", "glSecondaryColor3ui", "glSecondaryColor3uiv",
      "glSecondaryColor3us", "glSecondaryColor3usv", "glSecondaryColorPointer",
      "glWindowPos2d", "glWindowPos2dv", "glWindowPos2f", "glWindowPos2fv",
      "glWindowPos2i", "glWindowPos2iv", "glWindowPos2s", "glWindowPos2sv",
      "glWindowPos3d", "glWindowPos3dv", "glWindowPos3f", "glWindowPos3fv",
      "glWindowPos3i", "glWindowPos3iv", "glWindowPos3s", "glWindowPos3sv",
    ],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_1_5,
    core: &[
      "glGenQueries", "glDeleteQueries", "glIsQuery", "glBeginQuery",
      "glEndQuery", "glGetQueryiv", "glGetQueryObjectiv", "glGetQueryObjectuiv",
      "glBindBuffer", "glDeleteBuffers", "glGenBuffers", "glIsBuffer",
      "glBufferData", "glBufferSubData", "glGetBufferSubData", "glMapBuffer",
      "glUnmapBuffer", "glGetBufferParameteriv", "glGetBufferPointerv",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_2_0,
    core: &[
      "glBlendEquationSeparate", "glDrawBuffers", "glStencilOpSeparate",
      "glStencilFuncSeparate", "glStencilMaskSeparate", "glAttachShader",
      "glBindAttribLocation", "glCompileShader", "glCreateProgram",
      "glCreateShader", "glDeleteProgram", "glDeleteShader", "glDetachShader",
      "glDisableVertexAttribArray", "glEnableVertexAttribArray",
      "glGetActiveAttrib", "glGetActiveUniform", "glGetAttachedShaders",
      "glGetAttribLocation", "glGetProgramiv", "glGetProgramInfoLog",
      "glGetShaderiv", "glGetShaderInfoLog", "glGetShaderSource",
      "glGetUniformLocation", "glGetUniformfv", "glGetUniformiv",
      "glGetVertexAttribdv", "glGetVertexAttribfv", "glGetVertexAttribiv",
      "glGetVertexAttribPointerv", "glIsProgram", "glIsShader", "glLinkProgram",
      "glShaderSource", "glUseProgram", "glUniform1f", "glUniform2f",
      "glUniform3f", "glUniform4f", "glUniform1i", "glUniform2i", "glUniform3i",
      "glUniform4i", "glUniform1fv", "glUniform2fv", "glUniform3fv",
      "glUniform4fv", "glUniform1iv", "glUniform2iv", "glUniform3iv",
      "glUniform4iv", "glUniformMatrix2fv", "glUniformMatrix3fv",
      "glUniformMatrix4fv", "glValidateProgram", "glVertexAttrib1d",
      "glVertexAttrib1dv", "glVertexAttrib1f", "glVertexAttrib1fv",
      "glVertexAttrib1s", "glVertexAttrib1sv", "glVertexAttrib2d",
      "glVertexAttrib2dv", "glVertexAttrib2f", "glVertexAttrib2fv",
      "glVertexAttrib2s", "glVertexAttrib2sv", "glVertexAttrib3d",
      "glVertexAttrib3dv", "glVertexAttrib3f", "glVertexAttrib3fv",
      "glVertexAttrib3s", "glVertexAttrib3sv", "glVertexAttrib4Nbv",
      "glVertexAttrib4Niv", "glVertexAttrib4Nsv", "glVertexAttrib4Nub",
      "glVertexAttrib4Nubv", "glVertexAttrib4Nuiv", "glVertexAttrib4Nusv",
      "glVertexAttrib4bv", "glVertexAttrib4d", "glVertexAttrib4dv",
      "glVertexAttrib4f", "glVertexAttrib4fv", "glVertexAttrib4iv",
      "glVertexAttrib4s", "glVertexAttrib4sv", "glVertexAttrib4ubv",
      "glVertexAttrib4uiv", "glVertexAttrib4usv", "glVertexAttribPointer",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_2_1,
    core: &[
      "glUniformMatrix2x3fv", "glUniformMatrix3x2fv", "glUniformMatrix2x4fv",
      "glUniformMatrix4x2fv", "glUniformMatrix3x4fv", "glUniformMatrix4x3fv",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_3_0,
    core: &[
      "glColorMaski", "glGetBooleani_v", "glGetIntegeri_v", "glEnablei",
      "glDisablei", "glIsEnabledi", "glBeginTransformFeedback",
      "glEndTransformFeedback", "glBindBufferRange", "glBindBufferBase",
      "glTransformFeedbackVaryings", "glGetTransformFeedbackVarying",
      "glClampColor", "glBeginConditionalRender", "glEndConditionalRender",
      "glVertexAttribIPointer", "glGetVertexAttribIiv", "glGetVertexAttribIuiv",
      "glVertexAttribI1i", "glVertexAttribI2i", "glVertexAttribI3i",
      "glVertexAttribI4i", "glVertexAttribI1ui", "glVertexAttribI2ui",
      "glVertexAttribI3ui", "glVertexAttribI4ui", "glVertexAttribI1iv",
      "glVertexAttribI2iv", "glVertexAttribI3iv", "glVertexAttribI4iv",
      "glVertexAttribI1uiv", "glVertexAttribI2uiv", "glVertexAttribI3uiv",
      "glVertexAttribI4uiv", "glVertexAttribI4bv", "glVertexAttribI4sv",
      "glVertexAttribI4ubv", "glVertexAttribI4usv", "glGetUniformuiv",
      "glBindFragDataLocation", "glGetFragDataLocation", "glUniform1ui",
      "glUniform2ui", "glUniform3ui", "glUniform4ui", "glUniform1uiv",
      "glUniform2uiv", "glUniform3uiv", "glUniform4uiv", "glTexParameterIiv",
      "glTexParameterIuiv", "glGetTexParameterIiv", "glGetTexParameterIuiv",
      "glClearBufferiv", "glClearBufferuiv", "glClearBufferfv",
      "glClearBufferfi", "glGetStringi", "glIsRenderbuffer",
      "glBindRenderbuffer", "glDeleteRenderbuffers", "glGenRenderbuffers",
      "glRenderbufferStorage", "glGetRenderbufferParameteriv",
      "glIsFramebuffer", "glBindFramebuffer", "glDeleteFramebuffers",
      "glGenFramebuffers", "glCheckFramebufferStatus", "glFramebufferTexture1D",
      "glFramebufferTexture2D", "glFramebufferTexture3D",
      "glFramebufferRenderbuffer", "glGetFramebufferAttachmentParameteriv",
      "glGenerateMipmap", "glBlitFramebuffer",
      "glRenderbufferStorageMultisample", "glFramebufferTextureLayer",
      "glMapBufferRange", "glFlushMappedBufferRange", "glBindVertexArray",
      "glDeleteVertexArrays", "glGenVertexArrays", "glIsVertexArray",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_3_1,
    core: &[
      "glDrawArraysInstanced", "glDrawElementsInstanced", "glTexBuffer",
      "glPrimitiveRestartIndex", "glCopyBufferSubData", "glGetUniformIndices",
      "glGetActiveUniformsiv", "glGetActiveUniformName",
      "glGetUniformBlockIndex", "glGetActiveUniformBlockiv",
      "glGetActiveUniformBlockName", "glUniformBlockBinding",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_3_2,
    core: &[
      "glDrawElementsBaseVertex", "glDrawRangeElementsBaseVertex",
      "glDrawElementsInstancedBaseVertex", "glMultiDrawElementsBaseVertex",
      "glProvokingVertex", "glFenceSync", "glIsSync", "glDeleteSync",
      "glClientWaitSync", "glWaitSync", "glGetInteger64v", "glGetSynciv",
      "glGetInteger64i_v", "glGetBufferParameteri64v", "glFramebufferTexture",
      "glTexImage2DMultisample", "glTexImage3DMultisample",
      "glGetMultisamplefv", "glSampleMaski",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_3_3,
    core: &[
      "glBindFragDataLocationIndexed", "glGetFragDataIndex", "glGenSamplers",
      "glDeleteSamplers", "glIsSampler", "glBindSampler", "glSamplerParameteri",
      "glSamplerParameteriv", "glSamplerParameterf", "glSamplerParameterfv",
      "glSamplerParameterIiv", "glSamplerParameterIuiv",
      "glGetSamplerParameteriv", "glGetSamplerParameterIiv",
      "glGetSamplerParameterfv", "glGetSamplerParameterIuiv", "glQueryCounter",
      "glGetQueryObjecti64v", "glGetQueryObjectui64v", "glVertexAttribDivisor",
      "glVertexAttribP1ui", "glVertexAttribP1uiv", "glVertexAttribP2ui",
      "glVertexAttribP2uiv", "glVertexAttribP3ui", "glVertexAttribP3uiv",
      "glVertexAttribP4ui", "glVertexAttribP4uiv",
    ],
    compatibility: &[
      "glVertexP2ui", "glVertexP2uiv", "glVertexP3ui", "glVertexP3uiv",
      "glVertexP4ui", "glVertexP4uiv", "glTexCoordP1ui", "glTexCoordP1uiv",
      "glTexCoordP2ui", "glTexCoordP2uiv", "glTexCoordP3ui", "glTexCoordP3uiv",
      "glTexCoordP4ui", "glTexCoordP4uiv", "glMultiTexCoordP1ui",
      "glMultiTexCoordP1uiv", "glMultiTexCoordP2ui", "glMultiTexCoordP2uiv",
      "glMultiTexCoordP3ui", "glMultiTexCoordP3uiv", "glMultiTexCoordP4ui",
      "glMultiTexCoordP4uiv", "glNormalP3ui", "glNormalP3uiv", "glColorP3ui",
      "glColorP3uiv", "glColorP4ui", "glColorP4uiv", "glSecondaryColorP3ui",
      "glSecondaryColorP3uiv",
    ],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_4_0,
    core: &[
      "glMinSampleShading", "glBlendEquationi", "glBlendEquationSeparatei",
      "glBlendFunci", "glBlendFuncSeparatei", "glDrawArraysIndirect",
      "glDrawElementsIndirect", "glUniform1d", "glUniform2d", "glUniform3d",
      "glUniform4d", "glUniform1dv", "glUniform2dv", "glUniform3dv",
      "glUniform4dv", "glUniformMatrix2dv", "glUniformMatrix3dv",
      "glUniformMatrix4dv", "glUniformMatrix2x3dv", "glUniformMatrix2x4dv",
      "glUniformMatrix3x2dv", "glUniformMatrix3x4dv", "glUniformMatrix4x2dv",
      "glUniformMatrix4x3dv", "glGetUniformdv",
      "glGetSubroutineUniformLocation", "glGetSubroutineIndex",
      "glGetActiveSubroutineUniformiv", "glGetActiveSubroutineUniformName",
      "glGetActiveSubroutineName", "glUniformSubroutinesuiv",
      "glGetUniformSubroutineuiv", "glGetProgramStageiv", "glPatchParameteri",
      "glPatchParameterfv", "glBindTransformFeedback",
      "glDeleteTransformFeedbacks", "glGenTransformFeedbacks",
      "glIsTransformFeedback", "glPauseTransformFeedback",
      "glResumeTransformFeedback", "glDrawTransformFeedback",
      "glDrawTransformFeedbackStream", "glBeginQueryIndexed",
      "glEndQueryIndexed", "glGetQueryIndexediv",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_4_1,
    core: &[
      "glReleaseShaderCompiler", "glShaderBinary", "glGetShaderPrecisionFormat",
      "glDepthRangef", "glClearDepthf", "glGetProgramBinary", "glProgramBinary",
      "glProgramParameteri", "glUseProgramStages", "glActiveShaderProgram",
      "glCreateShaderProgramv", "glBindProgramPipeline",
      "glDeleteProgramPipelines", "glGenProgramPipelines",
      "glIsProgramPipeline", "glGetProgramPipelineiv", "glProgramUniform1i",
      "glProgramUniform2i", "glProgramUniform3i", "glProgramUniform4i",
      "glProgramUniform1iv", "glProgramUniform2iv", "glProgramUniform3iv",
      "glProgramUniform4iv", "glProgramUniform1f", "glProgramUniform2f",
      "glProgramUniform3f", "glProgramUniform4f", "glProgramUniform1fv",
      "glProgramUniform2fv", "glProgramUniform3fv", "glProgramUniform4fv",
      "glProgramUniform1d", "glProgramUniform2d", "glProgramUniform3d",
      "glProgramUniform4d", "glProgramUniform1dv", "glProgramUniform2dv",
      "glProgramUniform3dv", "glProgramUniform4dv", "glProgramUniform1ui",
      "glProgramUniform2ui", "glProgramUniform3ui", "glProgramUniform4ui",
      "glProgramUniform1uiv", "glProgramUniform2uiv", "glProgramUniform3uiv",
      "glProgramUniform4uiv", "glProgramUniformMatrix2fv",
      "glProgramUniformMatrix3fv", "glProgramUniformMatrix4fv",
      "glProgramUniformMatrix2dv", "glProgramUniformMatrix3dv",
      "glProgramUniformMatrix4dv", "glProgramUniformMatrix2x3fv",
      "glProgramUniformMatrix3x2fv", "glProgramUniformMatrix2x4fv",
      "glProgramUniformMatrix4x2fv", "glProgramUniformMatrix3x4fv",
      "glProgramUniformMatrix4x3fv", "glProgramUniformMatrix2x3dv",
      "glProgramUniformMatrix3x2dv", "glProgramUniformMatrix2x4dv",
      "glProgramUniformMatrix4x2dv", "glProgramUniformMatrix3x4dv",
      "glProgramUniformMatrix4x3dv", "glValidateProgramPipeline",
      "glGetProgramPipelineInfoLog", "glVertexAttribL1d", "glVertexAttribL2d",
      "glVertexAttribL3d", "glVertexAttribL4d", "glVertexAttribL1dv",
      "glVertexAttribL2dv", "glVertexAttribL3dv", "glVertexAttribL4dv",
      "glVertexAttribLPointer", "glGetVertexAttribLdv", "glViewportArrayv",
      "glViewportIndexedf", "glViewportIndexedfv", "glScissorArrayv",
      "glScissorIndexed", "glScissorIndexedv", "glDepthRangeArrayv",
      "glDepthRangeIndexed", "glGetFloati_v", "glGetDoublei_v",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_4_2,
    core: &[
      "glDrawArraysInstancedBaseInstance",
      "glDrawElementsInstancedBaseInstance",
      "glDrawElementsInstancedBaseVertexBaseInstance", "glGetInternalformativ",
      "glGetActiveAtomicCounterBufferiv", "glBindImageTexture",
      "glMemoryBarrier", "glTexStorage1D", "glTexStorage2D", "glTexStorage3D",
      "glDrawTransformFeedbackInstanced",
      "glDrawTransformFeedbackStreamInstanced",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_4_3,
    core: &[
      "glClearBufferData", "glClearBufferSubData", "glDispatchCompute",
      "glDispatchComputeIndirect", "glCopyImageSubData",
      "glFramebufferParameteri", "glGetFramebufferParameteriv",
      "glGetInternalformati64v", "glInvalidateTexSubImage",
      "glInvalidateTexImage", "glInvalidateBufferSubData",
      "glInvalidateBufferData", "glInvalidateFramebuffer",
      "glInvalidateSubFramebuffer", "glMultiDrawArraysIndirect",
      "glMultiDrawElementsIndirect", "glGetProgramInterfaceiv",
      "glGetProgramResourceIndex", "glGetProgramResourceName",
      "glGetProgramResourceiv", "glGetProgramResourceLocation",
      "glGetProgramResourceLocationIndex", "glShaderStorageBlockBinding",
      "glTexBufferRange", "glTexStorage2DMultisample",
      "glTexStorage3DMultisample", "glTextureView", "glBindVertexBuffer",
      "glVertexAttribFormat", "glVertexAttribIFormat", "glVertexAttribLFormat",
      "glVertexAttribBinding", "glVertexBindingDivisor",
      "glDebugMessageControl", "glDebugMessageInsert", "glDebugMessageCallback",
      "glGetDebugMessageLog", "glPushDebugGroup", "glPopDebugGroup",
      "glObjectLabel", "glGetObjectLabel", "glObjectPtrLabel",
      "glGetObjectPtrLabel",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_4_4,
    core: &[
      "glBufferStorage", "glClearTexImage", "glClearTexSubImage",
      "glBindBuffersBase", "glBindBuffersRange", "glBindTextures",
      "glBindSamplers", "glBindImageTextures", "glBindVertexBuffers",
    ],
    compatibility: &[],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_4_5,
    core: &[
      "glClipControl", "glCreateTransformFeedbacks",
      "glTransformFeedbackBufferBase", "glTransformFeedbackBufferRange",
      "glGetTransformFeedbackiv", "glGetTransformFeedbacki_v",
      "glGetTransformFeedbacki64_v", "glCreateBuffers", "glNamedBufferStorage",
      "glNamedBufferData", "glNamedBufferSubData", "glCopyNamedBufferSubData",
      "glClearNamedBufferData", "glClearNamedBufferSubData", "glMapNamedBuffer",
      "glMapNamedBufferRange", "glUnmapNamedBuffer",
      "glFlushMappedNamedBufferRange", "glGetNamedBufferParameteriv",
      "glGetNamedBufferParameteri64v", "glGetNamedBufferPointerv",
      "glGetNamedBufferSubData", "glCreateFramebuffers",
      "glNamedFramebufferRenderbuffer", "glNamedFramebufferParameteri",
      "glNamedFramebufferTexture", "glNamedFramebufferTextureLayer",
      "glNamedFramebufferDrawBuffer", "glNamedFramebufferDrawBuffers",
      "glNamedFramebufferReadBuffer", "glInvalidateNamedFramebufferData",
      "glInvalidateNamedFramebufferSubData", "glClearNamedFramebufferiv",
      "glClearNamedFramebufferuiv", "glClearNamedFramebufferfv",
      "glClearNamedFramebufferfi", "glBlitNamedFramebuffer",
      "glCheckNamedFramebufferStatus", "glGetNamedFramebufferParameteriv",
      "glGetNamedFramebufferAttachmentParameteriv", "glCreateRenderbuffers",
      "glNamedRenderbufferStorage", "glNamedRenderbufferStorageMultisample",
      "glGetNamedRenderbufferParameteriv", "glCreateTextures",
      "glTextureBuffer", "glTextureBufferRange", "glTextureStorage1D",
      "glTextureStorage2D", "glTextureStorage3D",
      "glTextureStorage2DMultisample", "glTextureStorage3DMultisample",
      "glTextureSubImage1D", "glTextureSubImage2D", "glTextureSubImage3D",
      "glCompressedTextureSubImage1D", "glCompressedTextureSubImage2D",
      "glCompressedTextureSubImage3D", "glCopyTextureSubImage1D",
      "glCopyTextureSubImage2D", "glCopyTextureSubImage3D",
      "glTextureParameterf", "glTextureParameterfv", "glTextureParameteri",
      "glTextureParameterIiv", "glTextureParameterIuiv", "glTextureParameteriv",
      "glGenerateTextureMipmap", "glBindTextureUnit", "glGetTextureImage",
      "glGetCompressedTextureImage", "glGetTextureLevelParameterfv",
      "glGetTextureLevelParameteriv", "glGetTextureParameterfv",
      "glGetTextureParameterIiv", "glGetTextureParameterIuiv",
      "glGetTextureParameteriv", "glCreateVertexArrays",
      "glDisableVertexArrayAttrib", "glEnableVertexArrayAttrib",
      "glVertexArrayElementBuffer", "glVertexArrayVertexBuffer",
      "glVertexArrayVertexBuffers", "glVertexArrayAttribBinding",
      "glVertexArrayAttribFormat", "glVertexArrayAttribIFormat",
      "glVertexArrayAttribLFormat", "glVertexArrayBindingDivisor",
      "glGetVertexArrayiv", "glGetVertexArrayIndexediv",
      "glGetVertexArrayIndexed64iv", "glCreateSamplers",
      "glCreateProgramPipelines", "glCreateQueries",
      "glGetQueryBufferObjecti64v", "glGetQueryBufferObjectiv",
      "glGetQueryBufferObjectui64v", "glGetQueryBufferObjectuiv",
      "glMemoryBarrierByRegion", "glGetTextureSubImage",
      "glGetCompressedTextureSubImage", "glGetGraphicsResetStatus",
      "glGetnCompressedTexImage", "glGetnTexImage", "glGetnUniformdv",
      "glGetnUniformfv", "glGetnUniformiv", "glGetnUniformuiv", "glReadnPixels",
      "glTextureBarrier",
    ],
    compatibility: &[
      "glGetnMapdv", "glGetnMapfv", "glGetnMapiv", "glGetnPixelMapfv",
      "glGetnPixelMapuiv", "glGetnPixelMapusv", "glGetnPolygonStipple",
      "glGetnColorTable", "glGetnConvolutionFilter", "glGetnSeparableFilter",
      "glGetnHistogram", "glGetnMinmax",
    ],
  },
  VersionCommands {
    feature: Feature::GL_VERSION_4_6,
    core: &[
      "glSpecializeShader", "glMultiDrawArraysIndirectCount",
      "glMultiDrawElementsIndirectCount", "glPolygonOffsetClamp",
    ],
    compatibility: &[],
  },
];

static EMBEDDED: &[(Feature, &[&str])] = &[
  (
    Feature::GL_ES_VERSION_2_0,
    &[
      "glActiveTexture", "glAttachShader", "glBindAttribLocation",
      "glBindBuffer", "glBindFramebuffer", "glBindRenderbuffer",
      "glBindTexture", "glBlendColor", "glBlendEquation",
      "glBlendEquationSeparate", "glBlendFunc", "glBlendFuncSeparate",
      "glBufferData", "glBufferSubData", "glCheckFramebufferStatus", "glClear",
      "glClearColor", "glClearDepthf", "glClearStencil", "glColorMask",
      "glCompileShader", "glCompressedTexImage2D", "glCompressedTexSubImage2D",
      "glCopyTexImage2D", "glCopyTexSubImage2D", "glCreateProgram",
      "glCreateShader", "glCullFace", "glDeleteBuffers", "glDeleteFramebuffers",
      "glDeleteProgram", "glDeleteRenderbuffers", "glDeleteShader",
      "glDeleteTextures", "glDepthFunc", "glDepthMask", "glDepthRangef",
      "glDetachShader", "glDisable", "glDisableVertexAttribArray",
      "glDrawArrays", "glDrawElements", "glEnable", "glEnableVertexAttribArray",
      "glFinish", "glFlush", "glFramebufferRenderbuffer",
      "glFramebufferTexture2D", "glFrontFace", "glGenBuffers",
      "glGenerateMipmap", "glGenFramebuffers", "glGenRenderbuffers",
      "glGenTextures", "glGetActiveAttrib", "glGetActiveUniform",
      "glGetAttachedShaders", "glGetAttribLocation", "glGetBooleanv",
      "glGetBufferParameteriv", "glGetError", "glGetFloatv",
      "glGetFramebufferAttachmentParameteriv", "glGetIntegerv",
      "glGetProgramiv", "glGetProgramInfoLog", "glGetRenderbufferParameteriv",
      "glGetShaderiv", "glGetShaderInfoLog", "glGetShaderPrecisionFormat",
      "glGetShaderSource", "glGetString", "glGetTexParameterfv",
      "glGetTexParameteriv", "glGetUniformfv", "glGetUniformiv",
      "glGetUniformLocation", "glGetVertexAttribfv", "glGetVertexAttribiv",
      "glGetVertexAttribPointerv", "glHint", "glIsBuffer", "glIsEnabled",
      "glIsFramebuffer", "glIsProgram", "glIsRenderbuffer", "glIsShader",
      "glIsTexture", "glLineWidth", "glLinkProgram", "glPixelStorei",
      "glPolygonOffset", "glReadPixels", "glReleaseShaderCompiler",
      "glRenderbufferStorage", "glSampleCoverage", "glScissor",
      "glShaderBinary", "glShaderSource", "glStencilFunc",
      "glStencilFuncSeparate", "glStencilMask", "glStencilMaskSeparate",
      "glStencilOp", "glStencilOpSeparate", "glTexImage2D", "glTexParameterf",
      "glTexParameterfv", "glTexParameteri", "glTexParameteriv",
      "glTexSubImage2D", "glUniform1f", "glUniform2f", "glUniform3f",
      "glUniform4f", "glUniform1fv", "glUniform2fv", "glUniform3fv",
      "glUniform4fv", "glUniform1i", "glUniform2i", "glUniform3i",
      "glUniform4i", "glUniform1iv", "glUniform2iv", "glUniform3iv",
      "glUniform4iv", "glUniformMatrix2fv", "glUniformMatrix3fv",
      "glUniformMatrix4fv", "glUseProgram", "glValidateProgram",
      "glVertexAttrib1f", "glVertexAttrib2f", "glVertexAttrib3f",
      "glVertexAttrib4f", "glVertexAttrib1fv", "glVertexAttrib2fv",
      "glVertexAttrib3fv", "glVertexAttrib4fv", "glVertexAttribPointer",
      "glViewport",
    ],
  ),
  (
    Feature::GL_ES_VERSION_3_0,
    &[
      "glReadBuffer", "glDrawRangeElements", "glTexImage3D", "glTexSubImage3D",
      "glCopyTexSubImage3D", "glCompressedTexImage3D",
      "glCompressedTexSubImage3D", "glGenQueries", "glDeleteQueries",
      "glIsQuery", "glBeginQuery", "glEndQuery", "glGetQueryiv",
      "glGetQueryObjectuiv", "glUnmapBuffer", "glGetBufferPointerv",
      "glDrawBuffers", "glUniformMatrix2x3fv", "glUniformMatrix3x2fv",
      "glUniformMatrix2x4fv", "glUniformMatrix4x2fv", "glUniformMatrix3x4fv",
      "glUniformMatrix4x3fv", "glBlitFramebuffer",
      "glRenderbufferStorageMultisample", "glFramebufferTextureLayer",
      "glMapBufferRange", "glFlushMappedBufferRange", "glBindVertexArray",
      "glDeleteVertexArrays", "glGenVertexArrays", "glIsVertexArray",
      "glGetIntegeri_v", "glBeginTransformFeedback", "glEndTransformFeedback",
      "glBindBufferRange", "glBindBufferBase", "glTransformFeedbackVaryings",
      "glGetTransformFeedbackVarying", "glVertexAttribIPointer",
      "glGetVertexAttribIiv", "glGetVertexAttribIuiv", "glVertexAttribI4i",
      "glVertexAttribI4ui", "glVertexAttribI4iv", "glVertexAttribI4uiv",
      "glGetUniformuiv", "glGetFragDataLocation", "glUniform1ui",
      "glUniform2ui", "glUniform3ui", "glUniform4ui", "glUniform1uiv",
      "glUniform2uiv", "glUniform3uiv", "glUniform4uiv", "glClearBufferiv",
      "glClearBufferuiv", "glClearBufferfv", "glClearBufferfi", "glGetStringi",
      "glCopyBufferSubData", "glGetUniformIndices", "glGetActiveUniformsiv",
      "glGetUniformBlockIndex", "glGetActiveUniformBlockiv",
      "glGetActiveUniformBlockName", "glUniformBlockBinding",
      "glDrawArraysInstanced", "glDrawElementsInstanced", "glFenceSync",
      "glIsSync", "glDeleteSync", "glClientWaitSync", "glWaitSync",
      "glGetInteger64v", "glGetSynciv", "glGetInteger64i_v",
      "glGetBufferParameteri64v", "glGenSamplers", "glDeleteSamplers",
      "glIsSampler", "glBindSampler", "glSamplerParameteri",
      "glSamplerParameteriv", "glSamplerParameterf", "glSamplerParameterfv",
      "glGetSamplerParameteriv", "glGetSamplerParameterfv",
      "glVertexAttribDivisor", "glBindTransformFeedback",
      "glDeleteTransformFeedbacks", "glGenTransformFeedbacks",
      "glIsTransformFeedback", "glPauseTransformFeedback",
      "glResumeTransformFeedback", "glGetProgramBinary", "glProgramBinary",
      "glProgramParameteri", "glInvalidateFramebuffer",
      "glInvalidateSubFramebuffer", "glTexStorage2D", "glTexStorage3D",
      "glGetInternalformativ",
    ],
  ),
  (
    Feature::GL_ES_VERSION_3_1,
    &[
      "glDispatchCompute", "glDispatchComputeIndirect", "glDrawArraysIndirect",
      "glDrawElementsIndirect", "glFramebufferParameteri",
      "glGetFramebufferParameteriv", "glGetProgramInterfaceiv",
      "glGetProgramResourceIndex", "glGetProgramResourceName",
      "glGetProgramResourceiv", "glGetProgramResourceLocation",
      "glUseProgramStages", "glActiveShaderProgram", "glCreateShaderProgramv",
      "glBindProgramPipeline", "glDeleteProgramPipelines",
      "glGenProgramPipelines", "glIsProgramPipeline", "glGetProgramPipelineiv",
      "glProgramUniform1i", "glProgramUniform2i", "glProgramUniform3i",
      "glProgramUniform4i", "glProgramUniform1ui", "glProgramUniform2ui",
      "glProgramUniform3ui", "glProgramUniform4ui", "glProgramUniform1f",
      "glProgramUniform2f", "glProgramUniform3f", "glProgramUniform4f",
      "glProgramUniform1iv", "glProgramUniform2iv", "glProgramUniform3iv",
      "glProgramUniform4iv", "glProgramUniform1uiv", "glProgramUniform2uiv",
      "glProgramUniform3uiv", "glProgramUniform4uiv", "glProgramUniform1fv",
      "glProgramUniform2fv", "glProgramUniform3fv", "glProgramUniform4fv",
      "glProgramUniformMatrix2fv", "glProgramUniformMatrix3fv",
      "glProgramUniformMatrix4fv", "glProgramUniformMatrix2x3fv",
      "glProgramUniformMatrix3x2fv", "glProgramUniformMatrix2x4fv",
      "glProgramUniformMatrix4x2fv", "glProgramUniformMatrix3x4fv",
      "glProgramUniformMatrix4x3fv", "glValidateProgramPipeline",
      "glGetProgramPipelineInfoLog", "glBindImageTexture", "glGetBooleani_v",
      "glMemoryBarrier", "glMemoryBarrierByRegion", "glTexStorage2DMultisample",
      "glGetMultisamplefv", "glSampleMaski", "glGetTexLevelParameteriv",
      "glGetTexLevelParameterfv", "glBindVertexBuffer", "glVertexAttribFormat",
      "glVertexAttribIFormat", "glVertexAttribBinding",
      "glVertexBindingDivisor",
    ],
  ),
  (
    Feature::GL_ES_VERSION_3_2,
    &[
      "glBlendBarrier", "glCopyImageSubData", "glDebugMessageControl",
      "glDebugMessageInsert", "glDebugMessageCallback", "glGetDebugMessageLog",
      "glPushDebugGroup", "glPopDebugGroup", "glObjectLabel",
      "glGetObjectLabel", "glObjectPtrLabel", "glGetObjectPtrLabel",
      "glGetPointerv", "glEnablei", "glDisablei", "glBlendEquationi",
      "glBlendEquationSeparatei", "glBlendFunci", "glBlendFuncSeparatei",
      "glColorMaski", "glIsEnabledi", "glDrawElementsBaseVertex",
      "glDrawRangeElementsBaseVertex", "glDrawElementsInstancedBaseVertex",
      "glFramebufferTexture", "glPrimitiveBoundingBox",
      "glGetGraphicsResetStatus", "glReadnPixels", "glGetnUniformfv",
      "glGetnUniformiv", "glGetnUniformuiv", "glMinSampleShading",
      "glPatchParameteri", "glTexParameterIiv", "glTexParameterIuiv",
      "glGetTexParameterIiv", "glGetTexParameterIuiv", "glSamplerParameterIiv",
      "glSamplerParameterIuiv", "glGetSamplerParameterIiv",
      "glGetSamplerParameterIuiv", "glTexBuffer", "glTexBufferRange",
      "glTexStorage3DMultisample",
    ],
  ),
];

static EXTENSIONS: &[ExtensionCommands] = &[
  ExtensionCommands {
    feature: Feature::GL_APPLE_vertex_array_object,
    requires: None,
    scope: None,
    commands: &[
      "glBindVertexArrayAPPLE", "glDeleteVertexArraysAPPLE",
      "glGenVertexArraysAPPLE", "glIsVertexArrayAPPLE",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_bindless_texture,
    requires: None,
    scope: None,
    commands: &[
      "glGetTextureHandleARB", "glGetTextureSamplerHandleARB",
      "glMakeTextureHandleResidentARB", "glMakeTextureHandleNonResidentARB",
      "glGetImageHandleARB", "glMakeImageHandleResidentARB",
      "glMakeImageHandleNonResidentARB", "glUniformHandleui64ARB",
      "glUniformHandleui64vARB", "glProgramUniformHandleui64ARB",
      "glProgramUniformHandleui64vARB", "glIsTextureHandleResidentARB",
      "glIsImageHandleResidentARB", "glVertexAttribL1ui64ARB",
      "glVertexAttribL1ui64vARB", "glGetVertexAttribLui64vARB",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_buffer_storage,
    requires: None,
    scope: None,
    commands: &[
      "glBufferStorage",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_clear_texture,
    requires: None,
    scope: None,
    commands: &[
      "glClearTexImage", "glClearTexSubImage",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_clip_control,
    requires: None,
    scope: None,
    commands: &[
      "glClipControl",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_compute_shader,
    requires: None,
    scope: None,
    commands: &[
      "glDispatchCompute", "glDispatchComputeIndirect",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_copy_image,
    requires: None,
    scope: None,
    commands: &[
      "glCopyImageSubData",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_debug_output,
    requires: None,
    scope: None,
    commands: &[
      "glDebugMessageControlARB", "glDebugMessageInsertARB",
      "glDebugMessageCallbackARB", "glGetDebugMessageLogARB",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_direct_state_access,
    requires: None,
    scope: None,
    commands: &[
      "glCreateTransformFeedbacks", "glTransformFeedbackBufferBase",
      "glTransformFeedbackBufferRange", "glGetTransformFeedbackiv",
      "glGetTransformFeedbacki_v", "glGetTransformFeedbacki64_v",
      "glCreateBuffers", "glNamedBufferStorage", "glNamedBufferData",
      "glNamedBufferSubData", "glCopyNamedBufferSubData",
      "glClearNamedBufferData", "glClearNamedBufferSubData", "glMapNamedBuffer",
      "glMapNamedBufferRange", "glUnmapNamedBuffer",
      "glFlushMappedNamedBufferRange", "glGetNamedBufferParameteriv",
      "glGetNamedBufferParameteri64v", "glGetNamedBufferPointerv",
      "glGetNamedBufferSubData", "glCreateFramebuffers",
      "glNamedFramebufferRenderbuffer", "glNamedFramebufferParameteri",
      "glNamedFramebufferTexture", "glNamedFramebufferTextureLayer",
      "glNamedFramebufferDrawBuffer", "glNamedFramebufferDrawBuffers",
      "glNamedFramebufferReadBuffer", "glInvalidateNamedFramebufferData",
      "glInvalidateNamedFramebufferSubData", "glClearNamedFramebufferiv",
      "glClearNamedFramebufferuiv", "glClearNamedFramebufferfv",
      "glClearNamedFramebufferfi", "glBlitNamedFramebuffer",
      "glCheckNamedFramebufferStatus", "glGetNamedFramebufferParameteriv",
      "glGetNamedFramebufferAttachmentParameteriv", "glCreateRenderbuffers",
      "glNamedRenderbufferStorage", "glNamedRenderbufferStorageMultisample",
      "glGetNamedRenderbufferParameteriv", "glCreateTextures",
      "glTextureBuffer", "glTextureBufferRange", "glTextureStorage1D",
      "glTextureStorage2D", "glTextureStorage3D",
      "glTextureStorage2DMultisample", "glTextureStorage3DMultisample",
      "glTextureSubImage1D", "glTextureSubImage2D", "glTextureSubImage3D",
      "glCompressedTextureSubImage1D", "glCompressedTextureSubImage2D",
      "glCompressedTextureSubImage3D", "glCopyTextureSubImage1D",
      "glCopyTextureSubImage2D", "glCopyTextureSubImage3D",
      "glTextureParameterf", "glTextureParameterfv", "glTextureParameteri",
      "glTextureParameterIiv", "glTextureParameterIuiv", "glTextureParameteriv",
      "glGenerateTextureMipmap", "glBindTextureUnit", "glGetTextureImage",
      "glGetCompressedTextureImage", "glGetTextureLevelParameterfv",
      "glGetTextureLevelParameteriv", "glGetTextureParameterfv",
      "glGetTextureParameterIiv", "glGetTextureParameterIuiv",
      "glGetTextureParameteriv", "glCreateVertexArrays",
      "glDisableVertexArrayAttrib", "glEnableVertexArrayAttrib",
      "glVertexArrayElementBuffer", "glVertexArrayVertexBuffer",
      "glVertexArrayVertexBuffers", "glVertexArrayAttribBinding",
      "glVertexArrayAttribFormat", "glVertexArrayAttribIFormat",
      "glVertexArrayAttribLFormat", "glVertexArrayBindingDivisor",
      "glGetVertexArrayiv", "glGetVertexArrayIndexediv",
      "glGetVertexArrayIndexed64iv", "glCreateSamplers",
      "glCreateProgramPipelines", "glCreateQueries",
      "glGetQueryBufferObjecti64v", "glGetQueryBufferObjectiv",
      "glGetQueryBufferObjectui64v", "glGetQueryBufferObjectuiv",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_draw_instanced,
    requires: None,
    scope: None,
    commands: &[
      "glDrawArraysInstancedARB", "glDrawElementsInstancedARB",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_framebuffer_object,
    requires: None,
    scope: None,
    commands: &[
      "glIsRenderbuffer", "glBindRenderbuffer", "glDeleteRenderbuffers",
      "glGenRenderbuffers", "glRenderbufferStorage",
      "glGetRenderbufferParameteriv", "glIsFramebuffer", "glBindFramebuffer",
      "glDeleteFramebuffers", "glGenFramebuffers", "glCheckFramebufferStatus",
      "glFramebufferTexture1D", "glFramebufferTexture2D",
      "glFramebufferTexture3D", "glFramebufferRenderbuffer",
      "glGetFramebufferAttachmentParameteriv", "glGenerateMipmap",
      "glBlitFramebuffer", "glRenderbufferStorageMultisample",
      "glFramebufferTextureLayer",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_get_program_binary,
    requires: None,
    scope: None,
    commands: &[
      "glGetProgramBinary", "glProgramBinary", "glProgramParameteri",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_gl_spirv,
    requires: None,
    scope: None,
    commands: &[
      "glSpecializeShaderARB",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_gpu_shader_int64,
    requires: None,
    scope: None,
    commands: &[
      "glUniform1i64ARB", "glUniform2i64ARB", "glUniform3i64ARB",
      "glUniform4i64ARB", "glUniform1i64vARB", "glUniform2i64vARB",
      "glUniform3i64vARB", "glUniform4i64vARB", "glUniform1ui64ARB",
      "glUniform2ui64ARB", "glUniform3ui64ARB", "glUniform4ui64ARB",
      "glUniform1ui64vARB", "glUniform2ui64vARB", "glUniform3ui64vARB",
      "glUniform4ui64vARB", "glGetUniformi64vARB", "glGetUniformui64vARB",
      "glGetnUniformi64vARB", "glGetnUniformui64vARB",
      "glProgramUniform1i64ARB", "glProgramUniform2i64ARB",
      "glProgramUniform3i64ARB", "glProgramUniform4i64ARB",
      "glProgramUniform1i64vARB", "glProgramUniform2i64vARB",
      "glProgramUniform3i64vARB", "glProgramUniform4i64vARB",
      "glProgramUniform1ui64ARB", "glProgramUniform2ui64ARB",
      "glProgramUniform3ui64ARB", "glProgramUniform4ui64ARB",
      "glProgramUniform1ui64vARB", "glProgramUniform2ui64vARB",
      "glProgramUniform3ui64vARB", "glProgramUniform4ui64vARB",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_indirect_parameters,
    requires: None,
    scope: None,
    commands: &[
      "glMultiDrawArraysIndirectCountARB",
      "glMultiDrawElementsIndirectCountARB",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_instanced_arrays,
    requires: None,
    scope: None,
    commands: &[
      "glVertexAttribDivisorARB",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_multi_bind,
    requires: None,
    scope: None,
    commands: &[
      "glBindBuffersBase", "glBindBuffersRange", "glBindTextures",
      "glBindSamplers", "glBindImageTextures", "glBindVertexBuffers",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_multi_draw_indirect,
    requires: None,
    scope: None,
    commands: &[
      "glMultiDrawArraysIndirect", "glMultiDrawElementsIndirect",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_program_interface_query,
    requires: None,
    scope: None,
    commands: &[
      "glGetProgramInterfaceiv", "glGetProgramResourceIndex",
      "glGetProgramResourceName", "glGetProgramResourceiv",
      "glGetProgramResourceLocation", "glGetProgramResourceLocationIndex",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_sampler_objects,
    requires: None,
    scope: None,
    commands: &[
      "glGenSamplers", "glDeleteSamplers", "glIsSampler", "glBindSampler",
      "glSamplerParameteri", "glSamplerParameteriv", "glSamplerParameterf",
      "glSamplerParameterfv", "glSamplerParameterIiv", "glSamplerParameterIuiv",
      "glGetSamplerParameteriv", "glGetSamplerParameterIiv",
      "glGetSamplerParameterfv", "glGetSamplerParameterIuiv",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_separate_shader_objects,
    requires: None,
    scope: None,
    commands: &[
      "glUseProgramStages", "glActiveShaderProgram", "glCreateShaderProgramv",
      "glBindProgramPipeline", "glDeleteProgramPipelines",
      "glGenProgramPipelines", "glIsProgramPipeline", "glGetProgramPipelineiv",
      "glProgramUniform1i", "glProgramUniform2i", "glProgramUniform3i",
      "glProgramUniform4i", "glProgramUniform1iv", "glProgramUniform2iv",
      "glProgramUniform3iv", "glProgramUniform4iv", "glProgramUniform1f",
      "glProgramUniform2f", "glProgramUniform3f", "glProgramUniform4f",
      "glProgramUniform1fv", "glProgramUniform2fv", "glProgramUniform3fv",
      "glProgramUniform4fv", "glProgramUniform1d", "glProgramUniform2d",
      "glProgramUniform3d", "glProgramUniform4d", "glProgramUniform1dv",
      "glProgramUniform2dv", "glProgramUniform3dv", "glProgramUniform4dv",
      "glProgramUniform1ui", "glProgramUniform2ui", "glProgramUniform3ui",
      "glProgramUniform4ui", "glProgramUniform1uiv", "glProgramUniform2uiv",
      "glProgramUniform3uiv", "glProgramUniform4uiv",
      "glProgramUniformMatrix2fv", "glProgramUniformMatrix3fv",
      "glProgramUniformMatrix4fv", "glProgramUniformMatrix2dv",
      "glProgramUniformMatrix3dv", "glProgramUniformMatrix4dv",
      "glProgramUniformMatrix2x3fv", "glProgramUniformMatrix3x2fv",
      "glProgramUniformMatrix2x4fv", "glProgramUniformMatrix4x2fv",
      "glProgramUniformMatrix3x4fv", "glProgramUniformMatrix4x3fv",
      "glProgramUniformMatrix2x3dv", "glProgramUniformMatrix3x2dv",
      "glProgramUniformMatrix2x4dv", "glProgramUniformMatrix4x2dv",
      "glProgramUniformMatrix3x4dv", "glProgramUniformMatrix4x3dv",
      "glValidateProgramPipeline", "glGetProgramPipelineInfoLog",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_shader_atomic_counters,
    requires: None,
    scope: None,
    commands: &[
      "glGetActiveAtomicCounterBufferiv",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_shader_image_load_store,
    requires: None,
    scope: None,
    commands: &[
      "glBindImageTexture", "glMemoryBarrier",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_shader_storage_buffer_object,
    requires: None,
    scope: None,
    commands: &[
      "glShaderStorageBlockBinding",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_sync,
    requires: None,
    scope: None,
    commands: &[
      "glFenceSync", "glIsSync", "glDeleteSync", "glClientWaitSync",
      "glWaitSync", "glGetInteger64v", "glGetSynciv",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_tessellation_shader,
    requires: None,
    scope: None,
    commands: &[
      "glPatchParameteri", "glPatchParameterfv",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_texture_barrier,
    requires: None,
    scope: None,
    commands: &[
      "glTextureBarrier",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_texture_storage,
    requires: None,
    scope: None,
    commands: &[
      "glTexStorage1D", "glTexStorage2D", "glTexStorage3D",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_texture_view,
    requires: None,
    scope: None,
    commands: &[
      "glTextureView",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_timer_query,
    requires: None,
    scope: None,
    commands: &[
      "glQueryCounter", "glGetQueryObjecti64v", "glGetQueryObjectui64v",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_uniform_buffer_object,
    requires: None,
    scope: None,
    commands: &[
      "glGetUniformIndices", "glGetActiveUniformsiv", "glGetActiveUniformName",
      "glGetUniformBlockIndex", "glGetActiveUniformBlockiv",
      "glGetActiveUniformBlockName", "glUniformBlockBinding",
      "glBindBufferRange", "glBindBufferBase", "glGetIntegeri_v",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_vertex_array_object,
    requires: None,
    scope: None,
    commands: &[
      "glBindVertexArray", "glDeleteVertexArrays", "glGenVertexArrays",
      "glIsVertexArray",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_ARB_vertex_attrib_binding,
    requires: None,
    scope: None,
    commands: &[
      "glBindVertexBuffer", "glVertexAttribFormat", "glVertexAttribIFormat",
      "glVertexAttribLFormat", "glVertexAttribBinding",
      "glVertexBindingDivisor",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_debug_label,
    requires: None,
    scope: None,
    commands: &[
      "glLabelObjectEXT", "glGetObjectLabelEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: None,
    scope: None,
    commands: &[
      "glClientAttribDefaultEXT", "glPushClientAttribDefaultEXT",
      "glMatrixLoadfEXT", "glMatrixLoaddEXT", "glMatrixMultfEXT",
      "glMatrixMultdEXT", "glMatrixLoadIdentityEXT", "glMatrixRotatefEXT",
      "glMatrixRotatedEXT", "glMatrixScalefEXT", "glMatrixScaledEXT",
      "glMatrixTranslatefEXT", "glMatrixTranslatedEXT", "glMatrixFrustumEXT",
      "glMatrixOrthoEXT", "glMatrixPopEXT", "glMatrixPushEXT",
      "glMatrixLoadTransposefEXT", "glMatrixLoadTransposedEXT",
      "glMatrixMultTransposefEXT", "glMatrixMultTransposedEXT",
      "glTextureParameterfEXT", "glTextureParameterfvEXT",
      "glTextureParameteriEXT", "glTextureParameterivEXT",
      "glTextureImage1DEXT", "glTextureImage2DEXT", "glTextureSubImage1DEXT",
      "glTextureSubImage2DEXT", "glCopyTextureImage1DEXT",
      "glCopyTextureImage2DEXT", "glCopyTextureSubImage1DEXT",
      "glCopyTextureSubImage2DEXT", "glGetTextureImageEXT",
      "glGetTextureParameterfvEXT", "glGetTextureParameterivEXT",
      "glGetTextureLevelParameterfvEXT", "glGetTextureLevelParameterivEXT",
      "glTextureImage3DEXT", "glTextureSubImage3DEXT",
      "glCopyTextureSubImage3DEXT", "glBindMultiTextureEXT",
      "glMultiTexCoordPointerEXT", "glMultiTexEnvfEXT", "glMultiTexEnvfvEXT",
      "glMultiTexEnviEXT", "glMultiTexEnvivEXT", "glMultiTexGendEXT",
      "glMultiTexGendvEXT", "glMultiTexGenfEXT", "glMultiTexGenfvEXT",
      "glMultiTexGeniEXT", "glMultiTexGenivEXT", "glGetMultiTexEnvfvEXT",
      "glGetMultiTexEnvivEXT", "glGetMultiTexGendvEXT", "glGetMultiTexGenfvEXT",
      "glGetMultiTexGenivEXT", "glMultiTexParameteriEXT",
      "glMultiTexParameterivEXT", "glMultiTexParameterfEXT",
      "glMultiTexParameterfvEXT", "glMultiTexImage1DEXT",
      "glMultiTexImage2DEXT", "glMultiTexSubImage1DEXT",
      "glMultiTexSubImage2DEXT", "glCopyMultiTexImage1DEXT",
      "glCopyMultiTexImage2DEXT", "glCopyMultiTexSubImage1DEXT",
      "glCopyMultiTexSubImage2DEXT", "glGetMultiTexImageEXT",
      "glGetMultiTexParameterfvEXT", "glGetMultiTexParameterivEXT",
      "glGetMultiTexLevelParameterfvEXT", "glGetMultiTexLevelParameterivEXT",
      "glMultiTexImage3DEXT", "glMultiTexSubImage3DEXT",
      "glCopyMultiTexSubImage3DEXT", "glEnableClientStateIndexedEXT",
      "glDisableClientStateIndexedEXT", "glGetFloatIndexedvEXT",
      "glGetDoubleIndexedvEXT", "glGetPointerIndexedvEXT", "glEnableIndexedEXT",
      "glDisableIndexedEXT", "glIsEnabledIndexedEXT", "glGetIntegerIndexedvEXT",
      "glGetBooleanIndexedvEXT", "glCompressedTextureImage3DEXT",
      "glCompressedTextureImage2DEXT", "glCompressedTextureImage1DEXT",
      "glCompressedTextureSubImage3DEXT", "glCompressedTextureSubImage2DEXT",
      "glCompressedTextureSubImage1DEXT", "glGetCompressedTextureImageEXT",
      "glCompressedMultiTexImage3DEXT", "glCompressedMultiTexImage2DEXT",
      "glCompressedMultiTexImage1DEXT", "glCompressedMultiTexSubImage3DEXT",
      "glCompressedMultiTexSubImage2DEXT", "glCompressedMultiTexSubImage1DEXT",
      "glGetCompressedMultiTexImageEXT", "glNamedProgramStringEXT",
      "glNamedProgramLocalParameter4dEXT", "glNamedProgramLocalParameter4dvEXT",
      "glNamedProgramLocalParameter4fEXT", "glNamedProgramLocalParameter4fvEXT",
      "glGetNamedProgramLocalParameterdvEXT",
      "glGetNamedProgramLocalParameterfvEXT", "glGetNamedProgramivEXT",
      "glGetNamedProgramStringEXT", "glNamedProgramLocalParameters4fvEXT",
      "glTextureParameterIivEXT", "glTextureParameterIuivEXT",
      "glGetTextureParameterIivEXT", "glGetTextureParameterIuivEXT",
      "glMultiTexParameterIivEXT", "glMultiTexParameterIuivEXT",
      "glGetMultiTexParameterIivEXT", "glGetMultiTexParameterIuivEXT",
      "glProgramUniform1fEXT", "glProgramUniform2fEXT", "glProgramUniform3fEXT",
      "glProgramUniform4fEXT", "glProgramUniform1iEXT", "glProgramUniform2iEXT",
      "glProgramUniform3iEXT", "glProgramUniform4iEXT",
      "glProgramUniform1fvEXT", "glProgramUniform2fvEXT",
      "glProgramUniform3fvEXT", "glProgramUniform4fvEXT",
      "glProgramUniform1ivEXT", "glProgramUniform2ivEXT",
      "glProgramUniform3ivEXT", "glProgramUniform4ivEXT",
      "glProgramUniform1uiEXT", "glProgramUniform2uiEXT",
      "glProgramUniform3uiEXT", "glProgramUniform4uiEXT",
      "glProgramUniform1uivEXT", "glProgramUniform2uivEXT",
      "glProgramUniform3uivEXT", "glProgramUniform4uivEXT",
      "glProgramUniformMatrix2fvEXT", "glProgramUniformMatrix3fvEXT",
      "glProgramUniformMatrix4fvEXT", "glProgramUniformMatrix2x3fvEXT",
      "glProgramUniformMatrix3x2fvEXT", "glProgramUniformMatrix2x4fvEXT",
      "glProgramUniformMatrix4x2fvEXT", "glProgramUniformMatrix3x4fvEXT",
      "glProgramUniformMatrix4x3fvEXT", "glNamedBufferDataEXT",
      "glNamedBufferSubDataEXT", "glMapNamedBufferEXT", "glUnmapNamedBufferEXT",
      "glGetNamedBufferParameterivEXT", "glGetNamedBufferPointervEXT",
      "glGetNamedBufferSubDataEXT", "glTextureBufferEXT", "glMultiTexBufferEXT",
      "glNamedRenderbufferStorageEXT", "glGetNamedRenderbufferParameterivEXT",
      "glCheckNamedFramebufferStatusEXT", "glNamedFramebufferTexture1DEXT",
      "glNamedFramebufferTexture2DEXT", "glNamedFramebufferTexture3DEXT",
      "glNamedFramebufferRenderbufferEXT",
      "glGetNamedFramebufferAttachmentParameterivEXT",
      "glGenerateTextureMipmapEXT", "glGenerateMultiTexMipmapEXT",
      "glFramebufferDrawBufferEXT", "glFramebufferDrawBuffersEXT",
      "glFramebufferReadBufferEXT", "glGetFramebufferParameterivEXT",
      "glNamedRenderbufferStorageMultisampleEXT",
      "glNamedFramebufferTextureEXT", "glNamedFramebufferTextureLayerEXT",
      "glNamedFramebufferTextureFaceEXT", "glTextureRenderbufferEXT",
      "glMultiTexRenderbufferEXT", "glVertexArrayVertexOffsetEXT",
      "glVertexArrayColorOffsetEXT", "glVertexArrayEdgeFlagOffsetEXT",
      "glVertexArrayIndexOffsetEXT", "glVertexArrayNormalOffsetEXT",
      "glVertexArrayTexCoordOffsetEXT", "glVertexArrayMultiTexCoordOffsetEXT",
      "glVertexArrayFogCoordOffsetEXT", "glVertexArraySecondaryColorOffsetEXT",
      "glVertexArrayVertexAttribOffsetEXT",
      "glVertexArrayVertexAttribIOffsetEXT", "glEnableVertexArrayEXT",
      "glDisableVertexArrayEXT", "glEnableVertexArrayAttribEXT",
      "glDisableVertexArrayAttribEXT", "glGetVertexArrayIntegervEXT",
      "glGetVertexArrayPointervEXT", "glGetVertexArrayIntegeri_vEXT",
      "glGetVertexArrayPointeri_vEXT", "glMapNamedBufferRangeEXT",
      "glFlushMappedNamedBufferRangeEXT", "glNamedCopyBufferSubDataEXT",
      "glEnableClientStateiEXT", "glDisableClientStateiEXT", "glGetFloati_vEXT",
      "glGetDoublei_vEXT", "glGetPointeri_vEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_buffer_storage),
    scope: None,
    commands: &[
      "glNamedBufferStorageEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_clear_buffer_object),
    scope: None,
    commands: &[
      "glClearNamedBufferDataEXT", "glClearNamedBufferSubDataEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_framebuffer_no_attachments),
    scope: None,
    commands: &[
      "glNamedFramebufferParameteriEXT", "glGetNamedFramebufferParameterivEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_gpu_shader_fp64),
    scope: None,
    commands: &[
      "glProgramUniform1dEXT", "glProgramUniform2dEXT", "glProgramUniform3dEXT",
      "glProgramUniform4dEXT", "glProgramUniform1dvEXT",
      "glProgramUniform2dvEXT", "glProgramUniform3dvEXT",
      "glProgramUniform4dvEXT", "glProgramUniformMatrix2dvEXT",
      "glProgramUniformMatrix3dvEXT", "glProgramUniformMatrix4dvEXT",
      "glProgramUniformMatrix2x3dvEXT", "glProgramUniformMatrix2x4dvEXT",
      "glProgramUniformMatrix3x2dvEXT", "glProgramUniformMatrix3x4dvEXT",
      "glProgramUniformMatrix4x2dvEXT", "glProgramUniformMatrix4x3dvEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_instanced_arrays),
    scope: None,
    commands: &[
      "glVertexArrayVertexAttribDivisorEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_sparse_texture),
    scope: None,
    commands: &[
      "glTexturePageCommitmentEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_texture_buffer_range),
    scope: None,
    commands: &[
      "glTextureBufferRangeEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_texture_storage),
    scope: None,
    commands: &[
      "glTextureStorage1DEXT", "glTextureStorage2DEXT", "glTextureStorage3DEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_texture_storage_multisample),
    scope: None,
    commands: &[
      "glTextureStorage2DMultisampleEXT", "glTextureStorage3DMultisampleEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_vertex_attrib_64bit),
    scope: None,
    commands: &[
      "glVertexArrayVertexAttribLOffsetEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_ARB_vertex_attrib_binding),
    scope: None,
    commands: &[
      "glVertexArrayBindVertexBufferEXT", "glVertexArrayVertexAttribFormatEXT",
      "glVertexArrayVertexAttribIFormatEXT",
      "glVertexArrayVertexAttribLFormatEXT",
      "glVertexArrayVertexAttribBindingEXT",
      "glVertexArrayVertexBindingDivisorEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_NV_framebuffer_multisample_coverage),
    scope: None,
    commands: &[
      "glNamedRenderbufferStorageMultisampleCoverageEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_direct_state_access,
    requires: Some(Feature::GL_NV_gpu_program4),
    scope: None,
    commands: &[
      "glNamedProgramLocalParameterI4iEXT",
      "glNamedProgramLocalParameterI4ivEXT",
      "glNamedProgramLocalParametersI4ivEXT",
      "glNamedProgramLocalParameterI4uiEXT",
      "glNamedProgramLocalParameterI4uivEXT",
      "glNamedProgramLocalParametersI4uivEXT",
      "glGetNamedProgramLocalParameterIivEXT",
      "glGetNamedProgramLocalParameterIuivEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_EXT_framebuffer_object,
    requires: None,
    scope: None,
    commands: &[
      "glIsRenderbufferEXT", "glBindRenderbufferEXT",
      "glDeleteRenderbuffersEXT", "glGenRenderbuffersEXT",
      "glRenderbufferStorageEXT", "glGetRenderbufferParameterivEXT",
      "glIsFramebufferEXT", "glBindFramebufferEXT", "glDeleteFramebuffersEXT",
      "glGenFramebuffersEXT", "glCheckFramebufferStatusEXT",
      "glFramebufferTexture1DEXT", "glFramebufferTexture2DEXT",
      "glFramebufferTexture3DEXT", "glFramebufferRenderbufferEXT",
      "glGetFramebufferAttachmentParameterivEXT", "glGenerateMipmapEXT",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_KHR_debug,
    requires: None,
    scope: Some(Scope::Desktop),
    commands: &[
      "glDebugMessageControl", "glDebugMessageInsert", "glDebugMessageCallback",
      "glGetDebugMessageLog", "glPushDebugGroup", "glPopDebugGroup",
      "glObjectLabel", "glGetObjectLabel", "glObjectPtrLabel",
      "glGetObjectPtrLabel", "glGetPointerv",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_KHR_debug,
    requires: None,
    scope: Some(Scope::Embedded),
    commands: &[
      "glDebugMessageControlKHR", "glDebugMessageInsertKHR",
      "glDebugMessageCallbackKHR", "glGetDebugMessageLogKHR",
      "glPushDebugGroupKHR", "glPopDebugGroupKHR", "glObjectLabelKHR",
      "glGetObjectLabelKHR", "glObjectPtrLabelKHR", "glGetObjectPtrLabelKHR",
      "glGetPointervKHR",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_NV_bindless_texture,
    requires: None,
    scope: None,
    commands: &[
      "glGetTextureHandleNV", "glGetTextureSamplerHandleNV",
      "glMakeTextureHandleResidentNV", "glMakeTextureHandleNonResidentNV",
      "glGetImageHandleNV", "glMakeImageHandleResidentNV",
      "glMakeImageHandleNonResidentNV", "glUniformHandleui64NV",
      "glUniformHandleui64vNV", "glProgramUniformHandleui64NV",
      "glProgramUniformHandleui64vNV", "glIsTextureHandleResidentNV",
      "glIsImageHandleResidentNV",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_NV_conservative_raster,
    requires: None,
    scope: None,
    commands: &[
      "glSubpixelPrecisionBiasNV",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_NV_primitive_restart,
    requires: None,
    scope: None,
    commands: &[
      "glPrimitiveRestartNV", "glPrimitiveRestartIndexNV",
    ],
  },
  ExtensionCommands {
    feature: Feature::GL_NV_shader_buffer_load,
    requires: None,
    scope: None,
    commands: &[
      "glMakeBufferResidentNV", "glMakeBufferNonResidentNV",
      "glIsBufferResidentNV", "glMakeNamedBufferResidentNV",
      "glMakeNamedBufferNonResidentNV", "glIsNamedBufferResidentNV",
      "glGetBufferParameterui64vNV", "glGetNamedBufferParameterui64vNV",
      "glGetIntegerui64vNV", "glUniformui64NV", "glUniformui64vNV",
      "glGetUniformui64vNV", "glProgramUniformui64NV",
      "glProgramUniformui64vNV",
    ],
  },
];

fn symbol(name: &str) -> &'static Symbol {
  SYMBOLS
    .iter()
    .find(|s| s.name == name)
    .unwrap_or_else(|| panic!("`{name}` is not in the table"))
}

fn features(version: GlVersion, extensions: &[Feature]) -> Features {
  let set: ExtensionSet = extensions.iter().map(|f| f.name()).collect();
  Features::detect(version, &set)
}

fn version_of(feature: Feature) -> GlVersion {
  feature.version().unwrap()
}

#[test]
fn every_version_is_listed() {
  let desktop: Vec<Feature> = DESKTOP.iter().map(|v| v.feature).collect();
  let embedded: Vec<Feature> = EMBEDDED.iter().map(|(f, _)| *f).collect();
  let all: Vec<Feature> = desktop.iter().chain(&embedded).copied().collect();
  let versions: Vec<Feature> =
    Feature::ALL.iter().copied().filter(|f| f.version().is_some()).collect();
  assert_eq!(all, versions);
}

#[test]
fn desktop_commands_come_with_their_version() {
  use ContextProfile::*;
  let newest = features(GlVersion::desktop(4, 6), &[]);
  for (i, v) in DESKTOP.iter().enumerate() {
    let here = features(version_of(v.feature), &[]);
    let before = i
      .checked_sub(1)
      .map(|p| features(version_of(DESKTOP[p].feature), &[]));
    for &name in v.core {
      let s = symbol(name);
      assert!(s.is_expected(&here, Core), "{name}");
      assert!(s.is_expected(&here, Compatibility), "{name}");
      if let Some(before) = &before {
        assert!(!s.is_expected(before, Compatibility), "{name} is older");
      }
    }
    for &name in v.compatibility {
      let s = symbol(name);
      assert!(s.is_expected(&here, Compatibility), "{name}");
      assert!(!s.is_expected(&newest, Core), "{name} is in the core profile");
      if let Some(before) = &before {
        assert!(!s.is_expected(before, Compatibility), "{name} is older");
      }
    }
  }
}

#[test]
fn desktop_versions_provide_nothing_else() {
  for v in DESKTOP {
    for s in SYMBOLS {
      for p in s.providers.iter().filter(|p| p.feature == v.feature) {
        assert_eq!(p.requires, None, "{}", s.name);
        let listed = match p.scope {
          None => v.core.contains(&s.name),
          Some(Scope::Compatibility) => v.compatibility.contains(&s.name),
          Some(_) => false,
        };
        assert!(listed, "{} is not a {} command", s.name, v.feature.name());
      }
    }
  }
}

#[test]
fn es_commands_come_with_their_version() {
  for (i, (feature, names)) in EMBEDDED.iter().enumerate() {
    let here = features(version_of(*feature), &[]);
    let before =
      i.checked_sub(1).map(|p| features(version_of(EMBEDDED[p].0), &[]));
    for &name in *names {
      let s = symbol(name);
      assert!(s.is_expected(&here, ContextProfile::Embedded), "{name}");
      if let Some(before) = &before {
        assert!(
          !s.is_expected(before, ContextProfile::Embedded),
          "{name} is older"
        );
      }
    }
    for s in SYMBOLS {
      if s.providers.iter().any(|p| p.feature == *feature) {
        assert!(
          names.contains(&s.name),
          "{} is not a {} command",
          s.name,
          feature.name()
        );
      }
    }
  }
}

#[test]
fn extension_commands_come_with_their_extension() {
  for e in EXTENSIONS {
    let (version, profile) = match e.scope {
      Some(Scope::Embedded) => (GlVersion::es(3, 2), ContextProfile::Embedded),
      _ => (GlVersion::desktop(1, 0), ContextProfile::Compatibility),
    };
    let mut wanted = vec![e.feature];
    wanted.extend(e.requires);
    let with = features(version, &wanted);
    let without = features(version, &[]);
    for &name in e.commands {
      let s = symbol(name);
      assert!(
        s.providers.iter().any(|p| {
          p.feature == e.feature
            && p.requires == e.requires
            && e.scope.map_or(true, |scope| p.scope == Some(scope))
        }),
        "{name} doesn't list {}",
        e.feature.name()
      );
      assert!(s.is_expected(&with, profile), "{name}");
      assert!(!s.is_expected(&without, profile), "{name}");
    }
  }
}

#[test]
fn extensions_provide_nothing_else() {
  for s in SYMBOLS {
    for p in s.providers.iter().filter(|p| p.feature.version().is_none()) {
      let listed = EXTENSIONS.iter().any(|e| {
        e.feature == p.feature
          && e.requires == p.requires
          && e.scope.map_or(true, |scope| p.scope == Some(scope))
          && e.commands.contains(&s.name)
      });
      assert!(listed, "{} is not a {} command", s.name, p.feature.name());
    }
  }
}

#[test]
fn texture_commands_of_4_5_are_there() {
  let gl45 = features(GlVersion::desktop(4, 5), &[]);
  for name in [
    "glGetTextureSubImage",
    "glGetCompressedTextureSubImage",
    "glCompressedTextureSubImage2D",
    "glGetTextureImage",
    "glGetCompressedTextureImage",
  ] {
    assert!(symbol(name).is_expected(&gl45, ContextProfile::Core), "{name}");
  }
  let nv = features(
    GlVersion::desktop(3, 3),
    &[Feature::GL_NV_shader_buffer_load, Feature::GL_EXT_direct_state_access],
  );
  for name in ["glIsNamedBufferResidentNV", "glGetNamedBufferSubDataEXT"] {
    assert!(symbol(name).is_expected(&nv, ContextProfile::Core), "{name}");
  }
}
