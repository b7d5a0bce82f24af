//! Symbols the index knows without asking the engine.

pub const COMMANDS: &[&str] = &[
    "abs", "absboxchar", "absint", "acos", "acos_acos", "acosh",
    "acot", "acoth", "acsc", "acsch", "activate", "adapt_depth",
    "addcol", "additive", "addmatrices", "addrow", "adjoin", "adjoint",
    "affine_rectangle", "agd", "airy_ai", "airy_bi", "airy_dai", "airy_dbi",
    "alg_type", "algebraic", "algepsilon", "algexact", "algsys", "algsys_epsilon",
    "alias", "aliases", "all_dotsimp_denoms", "allbut", "allroots", "allsym",
    "alphabetic", "alphacharp", "alphanumericp", "amortization", "and", "annuity_fv",
    "annuity_pv", "antid", "antidiff", "antisymmetric", "append", "apply",
    "apply1", "apply2", "applyb1", "apropos", "apropos_scope", "args",
    "arithmetic", "arithsum", "array", "arrayapply", "arrayinfo", "arraymake",
    "arrays", "asec", "asech", "asin", "asinh", "asinh_asinh",
    "askexp", "askinteger", "asksign", "assoc", "assoc_legendre_p", "assoc_legendre_q",
    "assume", "assume_external_byte_order", "assume_pos", "assume_pos_pred", "assumescalar", "asymbol",
    "asympa", "at", "atan", "atan2", "atanh", "atensimp",
    "atom", "atomgrad", "atrig1", "atvalue", "augcoefmatrix", "autoload",
    "averager", "axes", "axis_3d", "axis_bottom", "axis_left", "axis_right",
    "axis_top", "backsubst", "backtrace", "bars", "barsplot", "base64",
    "base64_decode", "bashindices", "batch", "batchload", "bc2", "bdvac",
    "belln", "benefit_cost", "berlefact", "bern", "bernpoly", "bessel_i",
    "bessel_j", "bessel_k", "bessel_simplify", "bessel_y", "beta", "beta_args_sum_to_integer",
    "beta_expand", "beta_incomplete", "beta_incomplete_generalized", "beta_incomplete_regularized", "bezout", "bfallroots",
    "bffac", "bfhzeta", "bfloat", "bfloatp", "bfpsi", "bfpsi0",
    "bfzeta", "biconnected_components", "bimetric", "binomial", "bipartition", "bit_and",
    "bit_length", "bit_lsh", "bit_not", "bit_onep", "bit_or", "bit_rsh",
    "bit_xor", "block", "bode_gain", "bode_phase", "border", "bothcoef",
    "boundaries_array", "box", "boxchar", "boxplot", "break", "breakup",
    "bug_report", "build_info", "buildq", "burn", "cabs", "canform",
    "canten", "cardinality", "carg", "carlson_rc", "carlson_rd", "carlson_rf",
    "carlson_rj", "cartan", "catch", "cauchy_matrix", "cauchysum", "cbffac",
    "cbrange", "cbtics", "cdf_bernoulli", "cdf_beta", "cdf_binomial", "cdf_cauchy",
    "cdf_chi2", "cdf_continuous_uniform", "cdf_discrete_uniform", "cdf_exp", "cdf_f", "cdf_gamma",
    "cdf_general_finite_discrete", "cdf_geometric", "cdf_gumbel", "cdf_hypergeometric", "cdf_laplace", "cdf_logistic",
    "cdf_lognormal", "cdf_negative_binomial", "cdf_noncentral_chi2", "cdf_noncentral_student_t", "cdf_normal", "cdf_pareto",
    "cdf_poisson", "cdf_rank_sum", "cdf_rayleigh", "cdf_signed_rank", "cdf_student_t", "cdf_weibull",
    "cdisplay", "ceiling", "central_moment", "cequal", "cequalignore", "cf",
    "cfdisrep", "cfexpand", "cflength", "cframe_flag", "cgeodesic", "cgreaterp",
    "cgreaterpignore", "changename", "changevar", "chaosgame", "char", "charat",
    "charfun", "charfun2", "charlist", "charp", "charpoly", "chebyshev_t",
    "chebyshev_u", "chinese", "cholesky", "christof", "chromatic_index", "chromatic_number",
    "cint", "circulant_graph", "clear_edge_weight", "clear_rules", "clear_vertex_label", "clebsch_gordan",
    "clebsch_graph", "clessp", "clesspignore", "close", "closefile", "cmetric",
    "coeff", "coefmatrix", "cograd", "col", "collapse", "collectterms",
    "color", "colorbox", "columnop", "columns", "columnspace", "columnswap",
    "columnvector", "combination", "combine", "comp2pui", "compare", "compfile",
    "compile", "compile_file", "complement_graph", "complete_bipartite_graph", "complete_graph", "complex_number_p",
    "components", "compose_functions", "concan", "concat", "conjugate", "conmetderiv",
    "connect_vertices", "connected_components", "cons", "constant", "constantp", "constituent",
    "constvalue", "cont2part", "content", "continuous_freq", "contortion", "contour",
    "contour_levels", "contour_plot", "contract", "contract_edge", "contragrad", "contrib_ode",
    "convert", "coord", "copy", "copy_file", "copy_graph", "copylist",
    "copymatrix", "cor", "cos", "cosh", "cosnpiflag", "cot",
    "coth", "count", "covdiff", "covect", "covers", "create_graph",
    "create_list", "csc", "csch", "csetup", "cspline", "ct_coords",
    "ct_coordsys", "ctaylor", "ctime", "ctorsion_flag", "ctransform", "ctrgsimp",
    "cube_graph", "cuboctahedron_graph", "cunlisp", "current_let_rule_package", "cv", "cycle_digraph",
    "cycle_graph", "cylindrical", "data_file_name", "dataplot", "days360", "dblint",
    "deactivate", "debugmode", "declare", "declare_constvalue", "declare_dimensions", "declare_fundamental_dimensions",
    "declare_fundamental_units", "declare_qty", "declare_translated", "declare_unit_conversion", "declare_units", "declare_weights",
    "decsym", "default_let_rule_package", "defcon", "define", "defint", "defmatch",
    "defrule", "defstruct", "deftaylor", "degree_sequence", "del", "delay",
    "delete", "delete_file", "deleten", "delta", "demo", "demoivre",
    "denom", "dependencies", "depends", "derivabbrev", "derivdegree", "derivlist",
    "derivsubst", "describe", "desolve", "det_boundaries", "determinant", "dgauss_a",
    "dgauss_b", "dgeev", "dgemm", "dgeqrf", "dgesv", "dgesvd",
    "diag", "diag_matrix", "diagmatp", "diagmatrix", "diameter", "diff",
    "dim", "dimacs_export", "dimacs_import", "dimension", "dimensionless", "dimensions",
    "direct", "directory", "discrete_freq", "disjoin", "disjointp", "disolate",
    "disp", "dispJordan", "dispcon", "dispflag", "dispform", "dispfun",
    "display", "display2d", "display_format_internal", "disprule", "dispterms", "distrib",
    "divide", "divisors", "divsum", "do", "dodecahedron_graph", "domain",
    "dot0nscsimp", "dot0simp", "dot1simp", "dotassoc", "dotconstrules", "dotdistrib",
    "dotexptsimp", "dotident", "dotproduct", "dotscrules", "dotsimp", "dpart",
    "draw", "draw2d", "draw3d", "draw_file", "draw_graph", "draw_graph_program",
    "draw_realpart", "drawdf", "dscalar", "echelon", "edge_color", "edge_coloring",
    "edge_connectivity", "edge_partition", "edge_type", "edge_width", "edges", "eigens_by_jacobi",
    "eigenvalues", "eigenvectors", "eighth", "einstein", "eivals", "eivects",
    "ejacobian", "elapsed_real_time", "elapsed_run_time", "ele2comp", "ele2polynome", "ele2pui",
    "elem", "element", "elementp", "elevation", "elevation_grid", "elim",
    "elim_allbut", "eliminate", "eliminate_using", "ellipse", "ellipse_e", "ellipse_f",
    "elliptic_e", "elliptic_ec", "elliptic_eu", "elliptic_f", "elliptic_kc", "elliptic_pi",
    "ematrix", "empty_graph", "emptyp", "endcons", "enhanced3d", "entermatrix",
    "entertensor", "entier", "epsilon_lp", "equal", "equalp", "equiv_classes",
    "erf", "erf_generalized", "erf_representation", "erfc", "erfflag", "erfi",
    "errcatch", "errexp", "errintsce", "error", "errormsg", "errors",
    "euler", "eulers_number", "ev", "ev_point", "eval_string", "evenfun",
    "evenp", "every", "evflag", "evfun", "evolution", "evolution2d",
    "evundiff", "example", "exp", "expand", "expandwrt", "explicit",
    "explose", "expon", "exponentialize", "expop", "express", "expt",
    "exsec", "extdiff", "extract_linear_equations", "extremal_subset", "ezgcd", "f90",
    "facexpand", "facsum", "factcomb", "factlim", "factor", "factor_max_degree",
    "factor_max_degree_print_warning", "factorfacsum", "factorflag", "factorial", "factorial_expand", "factorout",
    "factorsum", "fast_central_elements", "fast_linsolve", "fasttimes", "fb", "feature",
    "featurep", "features", "fft", "fftpack5_fft", "fftpack5_inverse_fft", "fftpack5_inverse_real_fft",
    "fftpack5_real_fft", "fib", "fibtophi", "fifth", "file_name", "file_output_append",
    "file_search", "file_search_demo", "file_search_lisp", "file_search_maxima", "file_search_tests", "file_search_usage",
    "file_type", "file_type_lisp", "file_type_maxima", "filename_merge", "fill_color", "fill_density",
    "fillarray", "filled_func", "filter_by", "find_root", "find_root_abs", "find_root_error",
    "find_root_rel", "findde", "first", "fix", "flatten", "flength",
    "float", "float2bf", "floatnump", "floor", "flower_snark", "flush",
    "flush1deriv", "flushd", "flushnd", "flux", "font", "font_size",
    "for", "forget", "fortindent", "fortran", "fortspaces", "fourcos",
    "fourexpand", "fourier", "fourier_elim", "fourint", "fourintcos", "fourintsin",
    "foursimp", "foursin", "fourth", "fposition", "frame_bracket", "freeof",
    "freshline", "fresnel_c", "fresnel_s", "from_adjacency_matrix", "frucht_graph", "full_listify",
    "fullmap", "fullmapl", "fullratsimp", "fullratsubst", "fullsetify", "funcsolve",
    "functions", "fundamental_dimensions", "fundamental_units", "fundef", "funmake", "funp",
    "gamma", "gamma_expand", "gamma_incomplete", "gamma_incomplete_generalized", "gamma_incomplete_lower", "gamma_incomplete_regularized",
    "gammalim", "gauss_a", "gauss_b", "gaussprob", "gcd", "gcdex",
    "gcdivide", "gcfac", "gcfactor", "gd", "gdet", "gen_laguerre",
    "generalized_lambert_w", "genfact", "genindex", "genmatrix", "gensumnum", "gensym",
    "geo_amortization", "geo_annuity_fv", "geo_annuity_pv", "geomap", "geometric", "geometric_mean",
    "geosum", "get", "get_edge_weight", "get_lu_factors", "get_output_stream_string", "get_pixel",
    "get_plot_option", "get_tex_environment", "get_tex_environment_default", "get_vertex_label", "gfactor", "gfactorsum",
    "ggf", "ggfcfmax", "ggfinfinity", "girth", "global_variances", "globalsolve",
    "gnuplot_close", "gnuplot_command", "gnuplot_curve_styles", "gnuplot_curve_titles", "gnuplot_default_term_command", "gnuplot_dumb_term_command",
    "gnuplot_file_args", "gnuplot_file_name", "gnuplot_out_file", "gnuplot_pdf_term_command", "gnuplot_pm3d", "gnuplot_png_term_command",
    "gnuplot_postamble", "gnuplot_preamble", "gnuplot_ps_term_command", "gnuplot_replot", "gnuplot_reset", "gnuplot_restart",
    "gnuplot_start", "gnuplot_svg_term_command", "gnuplot_term", "gnuplot_view_args", "go", "gr2d",
    "gr3d", "gradef", "gradefs", "gramschmidt", "graph6_decode", "graph6_encode",
    "graph6_export", "graph6_import", "graph_center", "graph_charpoly", "graph_eigenvalues", "graph_flow",
    "graph_order", "graph_periphery", "graph_product", "graph_size", "graph_union", "great_rhombicosidodecahedron_graph",
    "great_rhombicuboctahedron_graph", "grid", "grid_graph", "grind", "grobner_basis", "grotzch_graph",
    "halfangles", "hamilton_cycle", "hamilton_path", "hankel", "hankel_1", "hankel_2",
    "harmonic", "harmonic_mean", "hav", "head_angle", "head_both", "head_length",
    "head_type", "heawood_graph", "hermite", "hessian", "hgfred", "hilbert_matrix",
    "hilbertmap", "hipow", "histogram", "histogram_description", "hodge", "horner",
    "hypergeometric", "hypergeometric_representation", "ibase", "ic1", "ic2", "ic_convert",
    "ichr1", "ichr2", "icosahedron_graph", "icosidodecahedron_graph", "icounter", "icurvature",
    "ident", "identfor", "identity", "idiff", "idim", "idummy",
    "idummyx", "ieqn", "ieqnprint", "ifactors", "ifb", "ifc1",
    "ifc2", "ifg", "ifgi", "ifr", "iframe_bracket_form", "iframes",
    "ifri", "ifs", "igcdex", "igeodesic_coords", "igeowedge_flag", "ikt1",
    "ikt2", "ilt", "image", "imagpart", "imetric", "implicit",
    "implicit_derivative", "implicit_plot", "in_neighbors", "inchar", "ind", "indexed_tensor",
    "indices", "induced_subgraph", "inf", "infeval", "infinity", "infix",
    "inflag", "infolists", "init_atensor", "init_ctensor", "inm", "inmc1",
    "inmc2", "innerproduct", "inpart", "inprod", "inrt", "integer_partitions",
    "integerp", "integervalue", "integrate", "integrate_use_rootsof", "integration_constant", "integration_constant_counter",
    "interpolate_color", "intersect", "intersection", "intfaclim", "intopois", "intosum",
    "inv_mod", "invariant1", "invariant2", "inverse_fft", "inverse_jacobi_cd", "inverse_jacobi_cn",
    "inverse_jacobi_cs", "inverse_jacobi_dc", "inverse_jacobi_dn", "inverse_jacobi_ds", "inverse_jacobi_nc", "inverse_jacobi_nd",
    "inverse_jacobi_ns", "inverse_jacobi_sc", "inverse_jacobi_sd", "inverse_jacobi_sn", "inverse_real_fft", "invert",
    "invert_by_adjoint", "invert_by_lu", "ip_grid", "ip_grid_in", "irr", "is",
    "is_biconnected", "is_bipartite", "is_connected", "is_digraph", "is_edge_in_graph", "is_graph",
    "is_graph_or_digraph", "is_isomorphic", "is_planar", "is_sconnected", "is_tree", "is_vertex_in_graph",
    "ishow", "isolate", "isomorphism", "isqrt", "isreal_p", "items_inference",
    "iterations", "itr", "jacobi", "jacobi_cd", "jacobi_cn", "jacobi_cs",
    "jacobi_dc", "jacobi_dn", "jacobi_ds", "jacobi_nc", "jacobi_nd", "jacobi_ns",
    "jacobi_p", "jacobi_sc", "jacobi_sd", "jacobi_sn", "jacobian", "jf",
    "join", "jordan", "julia", "kdels", "kdelta", "keepfloat",
    "key", "key_pos", "kill", "killcontext", "kinvariant", "kostka",
    "kron_delta", "kronecker_product", "kt", "kummer_m", "kummer_u", "kurtosis",
    "kurtosis_bernoulli", "kurtosis_beta", "kurtosis_binomial", "kurtosis_chi2", "kurtosis_continuous_uniform", "kurtosis_discrete_uniform",
    "kurtosis_exp", "kurtosis_f", "kurtosis_gamma", "kurtosis_general_finite_discrete", "kurtosis_geometric", "kurtosis_gumbel",
    "kurtosis_hypergeometric", "kurtosis_laplace", "kurtosis_logistic", "kurtosis_lognormal", "kurtosis_negative_binomial", "kurtosis_noncentral_chi2",
    "kurtosis_noncentral_student_t", "kurtosis_normal", "kurtosis_pareto", "kurtosis_poisson", "kurtosis_rayleigh", "kurtosis_student_t",
    "kurtosis_weibull", "label", "label_alignment", "label_orientation", "labels", "lagrange",
    "laguerre", "lambda", "lambert_w", "laplace", "laplacian_matrix", "lassociative",
    "last", "lbfgs", "lbfgs_ncorrections", "lbfgs_nfeval_max", "lc2kdt", "lc_l",
    "lc_u", "lcharp", "lcm", "ldefint", "ldisp", "ldisplay",
    "leftjust", "legend", "legendre_p", "legendre_q", "leinstein", "length",
    "let", "let_rule_packages", "letrat", "letrules", "letsimp", "levi_civita",
    "lfg", "lg", "lgtreillis", "lhospitallim", "lhs", "li",
    "limit", "lindstedt", "line_graph", "line_type", "line_width", "linear",
    "linear_program", "linear_solver", "linechar", "linel", "linenum", "lineqs",
    "linsolve", "linsolve_params", "linsolvewarn", "lispdisp", "list_correlations", "list_matrix_entries",
    "list_nc_monomials", "listarith", "listarray", "listconstvars", "listdummyvars", "listify",
    "listofvars", "listp", "lmax", "lmin", "lmxchar", "load",
    "load_pathname", "loadfile", "loadprint", "local", "locate_matrix_entry", "log",
    "log10", "log_gamma", "logabs", "logarc", "logcb", "logconcoeffp",
    "logcontract", "logexpand", "lognegint", "logsimp", "logx", "logy",
    "logz", "lopow", "lorentz_gauge", "lowercasep", "lpart", "lratsubst",
    "lreduce", "lriem", "lriemann", "lsquares_estimates", "lsquares_estimates_approximate", "lsquares_estimates_exact",
    "lsquares_mse", "lsquares_residual_mse", "lsquares_residuals", "lsum", "ltreillis", "lu_backsub",
    "lu_factor", "m1pbranch", "macroexpand", "macroexpand1", "macroexpansion", "macros",
    "makeOrders", "make_array", "make_graph", "make_level_picture", "make_poly_continent", "make_poly_country",
    "make_polygon", "make_random_state", "make_rgb_picture", "make_transform", "makebox", "makefact",
    "makegamma", "makelist", "makeset", "mandelbrot", "map", "mapatom",
    "maperror", "maplist", "mapprint", "mat_cond", "mat_fullunblocker", "mat_function",
    "mat_norm", "mat_trace", "mat_unblocker", "matchdeclare", "matchfix", "matrix",
    "matrix_element_add", "matrix_element_mult", "matrix_element_transpose", "matrix_size", "matrixexp", "matrixmap",
    "matrixp", "max", "max_clique", "max_degree", "max_flow", "max_independent_set",
    "max_matching", "maxapplydepth", "maxapplyheight", "maxi", "maximize_lp", "maxnegex",
    "maxposex", "maxpsifracdenom", "maxpsifracnum", "maxpsinegint", "maxpsiposint", "maxtayorder",
    "maybe", "mean", "mean_bernoulli", "mean_beta", "mean_binomial", "mean_chi2",
    "mean_continuous_uniform", "mean_deviation", "mean_discrete_uniform", "mean_exp", "mean_f", "mean_gamma",
    "mean_general_finite_discrete", "mean_geometric", "mean_gumbel", "mean_hypergeometric", "mean_laplace", "mean_logistic",
    "mean_lognormal", "mean_negative_binomial", "mean_noncentral_chi2", "mean_noncentral_student_t", "mean_normal", "mean_pareto",
    "mean_poisson", "mean_rayleigh", "mean_student_t", "mean_weibull", "median", "median_deviation",
    "member", "mesh", "mesh_lines_color", "method", "metricexpandall", "min",
    "min_degree", "min_edge_cut", "min_vertex_cover", "min_vertex_cut", "minfactorial", "mini",
    "minimalPoly", "minimize_lp", "minimum_spanning_tree", "minor", "minpack_lsquares", "minpack_solve",
    "mnctimes", "mod", "mod_big_prime", "mod_test", "mod_threshold", "mode_check_errorp",
    "mode_check_warnp", "mode_checkp", "mode_declare", "modulus_p", "moebius", "mon2schur",
    "mono", "monomial_dimensions", "mtrace", "multi_elem", "multi_orbit", "multi_pui",
    "multinomial", "multinomial_coeff", "multiplicative", "multiplicities", "multiplot_mode", "multsym",
    "multthru", "mycielski_graph", "myoptions", "nc_degree", "ncexpt", "ncharpoly",
    "negdistrib", "negsumdispflag", "neighbors", "new", "new_graph", "new_variable",
    "newcontext", "newdet", "newline", "newton", "newtonepsilon", "newtonmaxiter",
    "next_prime", "nextprime", "nicedummies", "niceindices", "ninth", "nofix",
    "nonarray", "noncentral_moment", "noncommutingp", "nonegative_lp", "nonmetricity", "nonnegintegerp",
    "nonscalar", "nonscalarp", "nonzeroandfreeof", "not", "notequal", "noundisp",
    "nounify", "nouns", "np", "npi", "nptetrad", "npv",
    "nroots", "nterms", "ntermst", "nthroot", "nticks", "ntrig",
    "nullity", "nullspace", "num", "num_distinct_partitions", "num_partitions", "numbered_boundaries",
    "numberp", "numer", "numer_pbranch", "numerval", "numfactor", "nusum",
    "nzeta", "nzetai", "nzetar", "obase", "octahedron_graph", "odd_girth",
    "oddfun", "oddp", "ode2", "ode_check", "odelin", "op",
    "opena", "opena_binary", "openr", "openr_binary", "openw", "openw_binary",
    "operatorp", "opproperties", "opsubst", "optimize", "optimprefix", "optionset",
    "or", "orbit", "orbits", "ordergreat", "ordergreatp", "orderless",
    "orderlessp", "orthogonal_complement", "orthopoly_recur", "orthopoly_returns_intervals", "orthopoly_weight", "out_neighbors",
    "outative", "outchar", "outermap", "outofpois", "packagefile", "pade",
    "palette", "parGosper", "parabolic_cylinder_d", "parametric", "parametric_surface", "parg",
    "parse_string", "parse_timedate", "part", "part2cont", "partfrac", "partition",
    "partition_set", "partpol", "path_digraph", "path_graph", "pathname_directory", "pathname_name",
    "pathname_type", "pdf_bernoulli", "pdf_beta", "pdf_binomial", "pdf_cauchy", "pdf_chi2",
    "pdf_continuous_uniform", "pdf_discrete_uniform", "pdf_exp", "pdf_f", "pdf_file", "pdf_gamma",
    "pdf_general_finite_discrete", "pdf_geometric", "pdf_gumbel", "pdf_hypergeometric", "pdf_laplace", "pdf_logistic",
    "pdf_lognormal", "pdf_negative_binomial", "pdf_noncentral_chi2", "pdf_noncentral_student_t", "pdf_normal", "pdf_pareto",
    "pdf_poisson", "pdf_rank_sum", "pdf_rayleigh", "pdf_signed_rank", "pdf_student_t", "pdf_weibull",
    "pearson_skewness", "permanent", "permut", "permutation", "permutations", "petersen_graph",
    "petrov", "pfeformat", "pic_height", "pic_width", "pickapart", "picture_equalp",
    "picturep", "piece", "piechart", "piechart_description", "planar_embedding", "playback",
    "plog", "plot2d", "plot3d", "plot_format", "plot_options", "plot_real_part",
    "plotdf", "ploteq", "plsquares", "pochhammer", "pochhammer_max_index", "point_size",
    "point_type", "points", "points_joined", "poisdiff", "poisexpt", "poismap",
    "poisplus", "poissimp", "polar", "polar_to_xy", "polarform", "poly_add",
    "poly_buchberger", "poly_colon_ideal", "poly_content", "poly_depends_p", "poly_elimination_ideal", "poly_expand",
    "poly_expt", "poly_gcd", "poly_grobner", "poly_ideal_intersection", "poly_lcm", "poly_minimization",
    "poly_multiply", "poly_normal_form", "poly_normalize", "poly_pseudo_divide", "poly_reduction", "poly_s_polynomial",
    "poly_saturation_extension", "poly_subtract", "polydecomp", "polyfactor", "polygon", "polymod",
    "polynome2ele", "polynomialp", "polytocompanion", "pos_neg_inverse", "posfun", "position",
    "potential", "power_mod", "powerdisp", "powers", "powerseries", "powerset",
    "prederror", "prev_prime", "primelmt", "primep", "primep_number_of_tests", "primes",
    "principal_components", "print", "print_graph", "printf", "printfile", "printpois",
    "printprops", "prodrac", "product", "product_use_gamma", "program", "programmode",
    "promote_float_to_bigfloat", "prompt", "properties", "proportional_axes", "props", "propvars",
    "psexpand", "psfile", "psi", "psubst", "ptriangularize", "pui",
    "pui2comp", "pui2ele", "pui2polynome", "pui_direct", "puireduc", "put",
    "qput", "qrange", "qty", "quad_control", "quad_qag", "quad_qagi",
    "quad_qagp", "quad_qags", "quad_qawc", "quad_qawf", "quad_qawo", "quad_qaws",
    "quadrilateral", "quantile", "quantile_bernoulli", "quantile_beta", "quantile_binomial", "quantile_cauchy",
    "quantile_chi2", "quantile_continuous_uniform", "quantile_discrete_uniform", "quantile_exp", "quantile_f", "quantile_gamma",
    "quantile_general_finite_discrete", "quantile_geometric", "quantile_gumbel", "quantile_hypergeometric", "quantile_laplace", "quantile_logistic",
    "quantile_lognormal", "quantile_negative_binomial", "quantile_noncentral_chi2", "quantile_noncentral_student_t", "quantile_normal", "quantile_pareto",
    "quantile_poisson", "quantile_rayleigh", "quantile_student_t", "quantile_weibull", "quartile_skewness", "quit",
    "qunit", "quotient", "radcan", "radexpand", "radius", "random",
    "random_bernoulli", "random_beta", "random_binomial", "random_bipartite_graph", "random_cauchy", "random_chi2",
    "random_continuous_uniform", "random_digraph", "random_discrete_uniform", "random_exp", "random_f", "random_gamma",
    "random_general_finite_discrete", "random_geometric", "random_graph", "random_graph1", "random_gumbel", "random_hypergeometric",
    "random_laplace", "random_logistic", "random_lognormal", "random_negative_binomial", "random_network", "random_noncentral_chi2",
    "random_noncentral_student_t", "random_normal", "random_pareto", "random_permutation", "random_poisson", "random_rayleigh",
    "random_regular_graph", "random_student_t", "random_tournament", "random_tree", "random_weibull", "range",
    "rank", "rassociative", "rat", "ratalgdenom", "ratchristof", "ratcoef",
    "ratdenom", "ratdenomdivide", "ratdiff", "rateinstein", "ratepsilon", "ratexpand",
    "ratfac", "rational", "rationalize", "ratmx", "ratnumer", "ratp",
    "ratprint", "ratriemann", "ratsimp", "ratsimpexpons", "ratsubst", "ratvars",
    "ratvarswitch", "ratweight", "ratweights", "ratweyl", "ratwtlvl", "read",
    "read_array", "read_binary_array", "read_binary_list", "read_binary_matrix", "read_hashed_array", "read_list",
    "read_matrix", "read_nested_list", "read_xpm", "readbyte", "readchar", "readline",
    "readonly", "real", "real_imagpart_to_conjugate", "realonly", "realpart", "realroots",
    "rearray", "rectangle", "rectform", "rectform_log_if_constant", "recttopolar", "rediff",
    "redraw", "reduce_consts", "reduce_order", "refcheck", "region", "region_boundaries",
    "region_boundaries_plus", "rem", "remainder", "remarray", "rembox", "remcomps",
    "remcon", "remcoord", "remfun", "remfunction", "remlet", "remove",
    "remove_constvalue", "remove_dimensions", "remove_edge", "remove_fundamental_dimensions", "remove_fundamental_units", "remove_plot_option",
    "remove_vertex", "rempart", "remrule", "remsym", "remvalue", "rename",
    "rename_file", "reset", "reset_displays", "residue", "resolvante", "resolvante_alternee1",
    "resolvante_bipartite", "resolvante_diedrale", "resolvante_klein", "resolvante_klein3", "resolvante_produit_sym", "resolvante_unitaire",
    "resolvante_vierer", "rest", "restart", "restore", "resultant", "return",
    "reveal", "reverse", "revert", "revert2", "rgb2level", "rhs",
    "ric", "ricci", "riem", "riemann", "rinvariant", "risch",
    "rk", "rmdir", "rmxchar", "rncombine", "romberg", "rombergabs",
    "rombergit", "rombergmin", "rombergtol", "room", "rootsconmode", "rootscontract",
    "rootsepsilon", "round", "row", "rowop", "rowswap", "rreduce",
    "run_testsuite", "same_xy", "same_xyz", "save", "savedef", "savefactors",
    "scalar", "scalarmatrixp", "scalarp", "scaled_bessel_i", "scaled_bessel_i0", "scaled_bessel_i1",
    "scalefactors", "scanmap", "scatterplot", "scatterplot_description", "scene", "schur2comp",
    "sconcat", "scopy", "scsimp", "scurvature", "sdowncase", "sec",
    "sech", "second", "sequal", "sequalignore", "set_draw_defaults", "set_edge_weight",
    "set_partitions", "set_plot_option", "set_random_state", "set_tex_environment", "set_tex_environment_default", "set_up_dot_simplifications",
    "set_vertex_label", "setcheck", "setcheckbreak", "setdifference", "setelmx", "setequalp",
    "setify", "setunits", "setval", "seventh", "sexplode", "sf",
    "sha1sum", "sha256sum", "shortest_path", "shortest_weighted_path", "show", "showcomps",
    "showratvars", "showtime", "sierpinskiale", "sierpinskimap", "sign", "signum",
    "similaritytransform", "simp", "simp_inequality", "simplified_output", "simplify_products", "simplify_sum",
    "simplode", "simpmetderiv", "simpsum", "simtran", "sin", "sinh",
    "sinnpiflag", "sinsert", "sinvertcase", "sixth", "skewness", "skewness_bernoulli",
    "skewness_beta", "skewness_binomial", "skewness_chi2", "skewness_continuous_uniform", "skewness_discrete_uniform", "skewness_exp",
    "skewness_f", "skewness_gamma", "skewness_general_finite_discrete", "skewness_geometric", "skewness_gumbel", "skewness_hypergeometric",
    "skewness_laplace", "skewness_logistic", "skewness_lognormal", "skewness_negative_binomial", "skewness_noncentral_chi2", "skewness_noncentral_student_t",
    "skewness_normal", "skewness_pareto", "skewness_poisson", "skewness_rayleigh", "skewness_student_t", "skewness_weibull",
    "slength", "smake", "small_rhombicosidodecahedron_graph", "small_rhombicuboctahedron_graph", "smax", "smin",
    "smismatch", "snowmap", "snub_cube_graph", "snub_dodecahedron_graph", "solve", "solve_rec",
    "solve_rec_rat", "solvedecomposes", "solveexplicit", "solvefactors", "solvenullwarn", "solveradcan",
    "solvetrigwarn", "somrac", "sort", "space", "sparse", "sparse6_decode",
    "sparse6_encode", "sparse6_export", "sparse6_import", "specint", "spherical", "spherical_bessel_j",
    "spherical_bessel_y", "spherical_hankel1", "spherical_hankel2", "spherical_harmonic", "spherical_to_xyz", "splice",
    "split", "sposition", "spring_embedding", "sprint", "sqfree", "sqrt",
    "sqrtdenest", "sqrtdispflag", "sremove", "sremovefirst", "sreverse", "ssearch",
    "ssort", "sstatus", "ssubst", "ssubstfirst", "staircase", "standardize",
    "standardize_inverse_trig", "stardisp", "starplot", "starplot_description", "status", "std",
    "std1", "std_bernoulli", "std_beta", "std_binomial", "std_chi2", "std_continuous_uniform",
    "std_discrete_uniform", "std_exp", "std_f", "std_gamma", "std_general_finite_discrete", "std_geometric",
    "std_gumbel", "std_hypergeometric", "std_laplace", "std_logistic", "std_lognormal", "std_negative_binomial",
    "std_noncentral_chi2", "std_noncentral_student_t", "std_normal", "std_pareto", "std_poisson", "std_rayleigh",
    "std_student_t", "std_weibull", "stemplot", "stirling", "stirling1", "stirling2",
    "strim", "striml", "strimr", "string", "stringdisp", "stringout",
    "stringp", "strong_components", "struve_h", "struve_l", "sublis", "sublis_apply_lambda",
    "sublist", "sublist_indices", "submatrix", "subnumsimp", "subset", "subsetp",
    "subst", "substinpart", "substpart", "subvar", "subvarp", "sum",
    "sumcontract", "sumexpand", "sumsplitfact", "supcase", "surface_hide", "svg_file",
    "symbolp", "symmetric", "symmetricp", "system", "tab", "take_channel",
    "take_inference", "tan", "tanh", "taylor", "taylor_logexpand", "taylor_order_coefficients",
    "taylor_simplifier", "taylor_truncate_polynomials", "taylordepth", "taylorinfo", "taylorp", "taytorat",
    "tcl_output", "tcontract", "tellrat", "tellsimp", "tellsimpafter", "tensorkill",
    "tentex", "tenth", "terminal", "test_mean", "test_means_difference", "test_normality",
    "test_proportion", "test_proportions_difference", "test_rank_sum", "test_sign", "test_signed_rank", "test_variance",
    "test_variance_ratio", "testsuite_files", "tex", "tex1", "texput", "third",
    "throw", "time", "timedate", "timer", "timer_devalue", "timer_info",
    "title", "tldefint", "tlimit", "tlimswitch", "to_lisp", "todd_coxeter",
    "toeplitz", "tokens", "topological_sort", "totaldisrep", "totalfourier", "totient",
    "tpartpol", "tr", "tr_array_as_ref", "tr_bound_function_applyp", "tr_file_tty_messagesp", "tr_float_can_branch_complex",
    "tr_function_call_default", "tr_numer", "tr_optimize_max_loop", "tr_semicompile", "tr_state_vars", "tr_warn_bad_function_calls",
    "tr_warn_fexpr", "tr_warn_meval", "tr_warn_mode", "tr_warn_undeclared", "tr_warn_undefined_variable", "tr_warnings_get",
    "trace", "trace_options", "transcompile", "transform", "transform_sample", "translate",
    "translate_file", "transpose", "transrun", "tree_reduce", "treefale", "treillis",
    "treinat", "triangle", "triangularize", "trigexpand", "trigexpandplus", "trigexpandtimes",
    "triginverses", "trigrat", "trigreduce", "trigsign", "trigsimp", "trivial_solutions",
    "true", "trunc", "truncate", "truncated_cube_graph", "truncated_dodecahedron_graph", "truncated_icosahedron_graph",
    "truncated_tetrahedron_graph", "tstep", "ttyoff", "tube", "tube_extremes", "tutte_graph",
    "ueivects", "ufg", "uforget", "ultraspherical", "underlying_graph", "undiff",
    "union", "unique", "unit_step", "unit_vectors", "uniteigenvectors", "unitp",
    "units", "unitvector", "unknown", "unless", "unorder", "unsum",
    "untellrat", "until", "untimer", "untrace", "uppercasep", "uric",
    "uricci", "uriem", "uriemann", "use_fast_arrays", "user_preamble", "usersetunits",
    "uvect", "values", "vandermonde_matrix", "var", "var1", "var_bernoulli",
    "var_beta", "var_binomial", "var_chi2", "var_continuous_uniform", "var_discrete_uniform", "var_exp",
    "var_f", "var_gamma", "var_general_finite_discrete", "var_geometric", "var_gumbel", "var_hypergeometric",
    "var_laplace", "var_logistic", "var_lognormal", "var_negative_binomial", "var_noncentral_chi2", "var_noncentral_student_t",
    "var_normal", "var_pareto", "var_poisson", "var_rayleigh", "var_student_t", "var_weibull",
    "vect_cross", "vector", "vectorpotential", "vectorsimp", "verbify", "verbose",
    "vers", "vertex_color", "vertex_coloring", "vertex_connectivity", "vertex_degree", "vertex_distance",
    "vertex_eccentricity", "vertex_in_degree", "vertex_out_degree", "vertex_partition", "vertex_size", "vertex_type",
    "vertices", "vertices_to_cycle", "vertices_to_path", "view", "warnings", "weyl",
    "wheel_graph", "while", "wiener_index", "wigner_3j", "wigner_6j", "wigner_9j",
    "with_stdout", "write_binary_data", "write_data", "writebyte", "writefile", "wronskian",
    "x_voxel", "xaxis", "xaxis_color", "xaxis_secondary", "xaxis_type", "xaxis_width",
    "xlabel", "xlabel_secondary", "xlength", "xrange", "xrange_secondary", "xreduce",
    "xthru", "xtics", "xtics_axis", "xtics_rotate", "xtics_rotate_secondary", "xtics_secondary",
    "xtics_secondary_axis", "xu_grid", "xy_file", "xyplane", "y_voxel", "yaxis",
    "yaxis_color", "yaxis_secondary", "yaxis_type", "yaxis_width", "ylabel", "ylabel_secondary",
    "ylength", "yrange", "yrange_secondary", "ytics", "ytics_axis", "ytics_rotate",
    "ytics_rotate_secondary", "ytics_secondary", "ytics_secondary_axis", "yv_grid", "z_voxel", "zaxis",
    "zaxis_color", "zaxis_type", "zaxis_width", "zeilberger", "zeroa", "zerob",
    "zerobern", "zeroequiv", "zerofor", "zeromatrix", "zeromatrixp", "zeta",
    "zlabel", "zlabel_rotate", "zlength", "zmin", "zn_add_table", "zn_carmichael_lambda",
    "zn_characteristic_factors", "zn_determinant", "zn_factor_generators", "zn_invert_by_lu", "zn_log", "zn_mult_table",
    "zn_nth_root", "zn_order", "zn_power_table", "zn_primroot", "zn_primroot_limit", "zn_primroot_p",
    "zn_primroot_pretest", "zn_primroot_verbose", "zrange", "ztics", "ztics_axis", "ztics_rotate",
];

/// Function templates. Placeholders are written as `<arg>`.
pub const TEMPLATES: &[&str] = &[
    "integrate(<expr>, <var>)",
    "integrate(<expr>, <var>, <lo>, <hi>)",
    "diff(<expr>, <var>)",
    "diff(<expr>, <var>, <n>)",
    "limit(<expr>, <var>, <val>)",
    "limit(<expr>, <var>, <val>, <dir>)",
    "sum(<expr>, <var>, <lo>, <hi>)",
    "product(<expr>, <var>, <lo>, <hi>)",
    "taylor(<expr>, <var>, <point>, <order>)",
    "solve(<eqn>, <var>)",
    "algsys([<eqns>], [<vars>])",
    "linsolve([<eqns>], [<vars>])",
    "find_root(<expr>, <var>, <lo>, <hi>)",
    "allroots(<expr>)",
    "realroots(<expr>, <bound>)",
    "ode2(<eqn>, <dvar>, <ivar>)",
    "desolve(<eqn>, <func>)",
    "ic1(<solution>, <xval>, <yval>)",
    "ic2(<solution>, <xval>, <yval>, <dval>)",
    "laplace(<expr>, <tvar>, <svar>)",
    "ilt(<expr>, <svar>, <tvar>)",
    "subst(<new>, <old>, <expr>)",
    "ratsubst(<new>, <old>, <expr>)",
    "expand(<expr>)",
    "factor(<expr>)",
    "ratsimp(<expr>)",
    "fullratsimp(<expr>)",
    "trigsimp(<expr>)",
    "trigexpand(<expr>)",
    "trigreduce(<expr>)",
    "partfrac(<expr>, <var>)",
    "coeff(<expr>, <var>, <n>)",
    "makelist(<expr>, <var>, <lo>, <hi>)",
    "makelist(<expr>, <var>, <list>)",
    "create_list(<form>, <var>, <list>)",
    "map(<f>, <expr>)",
    "apply(<f>, [<args>])",
    "matrix([<row1>], [<row2>])",
    "genmatrix(<f>, <rows>, <cols>)",
    "determinant(<m>)",
    "invert(<m>)",
    "transpose(<m>)",
    "eigenvalues(<m>)",
    "eigenvectors(<m>)",
    "charpoly(<m>, <var>)",
    "rank(<m>)",
    "plot2d(<expr>, [<var>, <lo>, <hi>])",
    "plot3d(<expr>, [<var1>, <lo1>, <hi1>], [<var2>, <lo2>, <hi2>])",
    "wxplot2d(<expr>, [<var>, <lo>, <hi>])",
    "wxplot3d(<expr>, [<var1>, <lo1>, <hi1>], [<var2>, <lo2>, <hi2>])",
    "block([<locals>], <expr>, ...)",
    "if <cond> then <expr> else <expr>",
    "for <var>: <lo> thru <hi> do <expr>",
    "while <cond> do <expr>",
    "define(<f>(<args>), <expr>)",
    "lambda([<args>], <expr>)",
    "assume(<pred>)",
    "declare(<name>, <property>)",
    "load(<file>)",
    "batch(<file>)",
    "demo(<file>)",
    "describe(<name>)",
    "example(<name>)",
    "romberg(<expr>, <var>, <lo>, <hi>)",
    "quad_qags(<expr>, <var>, <lo>, <hi>)",
    "bfloat(<expr>)",
    "float(<expr>)",
    "num(<expr>)",
    "denom(<expr>)",
    "gcd(<p1>, <p2>)",
    "lcm(<p1>, <p2>)",
    "divide(<p1>, <p2>, <var>)",
    "powerseries(<expr>, <var>, <point>)",
    "fourier(<expr>, <var>, <period>)",
    "nusum(<expr>, <var>, <lo>, <hi>)",
    "string(<expr>)",
    "print(<expr>, ...)",
    "printf(<dest>, <format>, <args>, ...)",
];

/// Names that can be typed between two presses of ESC.
pub const ESC_COMMANDS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
    "iota", "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi",
    "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi", "omega",
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta",
    "Iota", "Kappa", "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi",
    "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi", "Psi", "Omega",
    "hbar", "inf", "infinity", "partial", "integral", "sqrt", "sum", "prod",
    "in", "notin", "subset", "subseteq", "union", "intersection", "and", "or",
    "not", "xor", "nand", "nor", "equiv", "implies", "forall", "exists",
    "empty", "approx", "neq", "leq", "geq", "pm", "mp", "times",
    "div", "dot", "cross", "nabla", "deg", "angle", "parallel", "perp",
    "->", "<-", "=>", "<=", "<=>", "!=", ">=", "+-",
    "-+", "...", "^2", "^3",
];

pub const UNITS: &[&str] = &[
    "m", "kg", "s", "A", "K", "mol", "cd", "g", "km", "cm",
    "mm", "um", "nm", "pm", "ms", "us", "ns", "min", "h", "d",
    "yr", "Hz", "N", "Pa", "J", "W", "C", "V", "F", "ohm",
    "S", "Wb", "T", "H", "lm", "lx", "Bq", "Gy", "Sv", "kat",
    "L", "mL", "eV", "cal", "kcal", "kWh", "bar", "atm", "psi", "mmHg",
    "torr", "degC", "degF", "rad", "sr", "deg", "arcmin", "arcsec", "AU", "ly",
    "pc", "in", "ft", "yd", "mi", "nmi", "lb", "oz", "ton", "gal",
    "qt", "pt", "acre", "ha", "kN", "MPa", "GPa", "kJ", "MJ", "kW",
    "MW", "mA", "uA", "kV", "mV", "kHz", "MHz", "GHz", "M",
];
